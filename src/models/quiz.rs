use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validate::{FieldErrors, Validator};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<QuizOption>,
    pub category: String,
    pub order: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct QuizOption {
    pub value: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct QuizResponse {
    pub id: String,
    pub lead_id: Option<String>,
    pub question_id: Option<String>,
    pub answer: String,
    pub created_at: DateTime<Utc>,
}

/// Wire form for `POST /api/quiz/responses`. Lead and question references
/// are optional by contract; their existence is not checked.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResponseForm {
    pub lead_id: Option<String>,
    pub question_id: Option<String>,
    pub answer: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewQuizResponse {
    pub lead_id: Option<String>,
    pub question_id: Option<String>,
    pub answer: String,
}

impl QuizResponseForm {
    pub fn validate(&self) -> Result<NewQuizResponse, FieldErrors> {
        let mut v = Validator::new();
        v.require("answer", self.answer.as_deref());
        v.finish()?;

        Ok(NewQuizResponse {
            lead_id: self.lead_id.clone(),
            question_id: self.question_id.clone(),
            answer: self.answer.clone().unwrap_or_default(),
        })
    }
}
