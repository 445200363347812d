//! Quiz-to-stack recommendation engine.
//!
//! Currently a stub: every caller receives the same hormone-balance stack,
//! whatever they answered. The response slice is part of the signature so a
//! scoring engine can slot in behind the same contract.

use serde::Serialize;

use crate::models::quiz::QuizResponse;

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub stack_type: String,
    pub title: String,
    pub supplements: Vec<SupplementPick>,
}

#[derive(Debug, Serialize, Clone)]
pub struct SupplementPick {
    pub name: String,
    pub dosage: String,
    pub purpose: String,
    pub priority: String,
}

/// Map a set of quiz responses to a recommended stack.
///
/// The input is ignored for now; output is the fixed hormone-balance stack.
// TODO: score responses by question category once product supplies the
// answer-to-stack mapping.
pub fn recommend(_responses: &[QuizResponse]) -> Recommendation {
    Recommendation {
        stack_type: "hormone-balance".to_string(),
        title: "Your Hormone Balance Stack".to_string(),
        supplements: vec![
            SupplementPick {
                name: "Vitex (Chasteberry)".to_string(),
                dosage: "400mg daily".to_string(),
                purpose: "supports hormone regulation".to_string(),
                priority: "Priority".to_string(),
            },
            SupplementPick {
                name: "Vitamin D3".to_string(),
                dosage: "2000 IU daily".to_string(),
                purpose: "hormone synthesis support".to_string(),
                priority: "Essential".to_string(),
            },
        ],
    }
}
