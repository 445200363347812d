use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validate::{FieldErrors, Validator};

/// Acquisition channels a lead can arrive through.
pub const LEAD_SOURCES: &[&str] = &["quiz", "blueprint", "audit"];

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub first_name: String,
    pub email: String,
    pub source: String,
    pub quiz_results: Option<Value>,
    pub created_at: DateTime<Utc>,
}

/// Wire form for `POST /api/leads`. Every field is optional at the parse
/// stage so `validate` can report all missing fields by name.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadForm {
    pub first_name: Option<String>,
    pub email: Option<String>,
    pub source: Option<String>,
    pub quiz_results: Option<Value>,
}

/// A lead submission that has passed validation.
#[derive(Debug, Clone)]
pub struct NewLead {
    pub first_name: String,
    pub email: String,
    pub source: String,
    pub quiz_results: Option<Value>,
}

impl LeadForm {
    pub fn validate(&self) -> Result<NewLead, FieldErrors> {
        let mut v = Validator::new();
        v.require("firstName", self.first_name.as_deref());
        v.require_email("email", self.email.as_deref());
        v.one_of("source", self.source.as_deref(), LEAD_SOURCES);
        v.finish()?;

        Ok(NewLead {
            first_name: self.first_name.clone().unwrap_or_default().trim().to_string(),
            email: self.email.clone().unwrap_or_default().trim().to_string(),
            source: self.source.clone().unwrap_or_default(),
            quiz_results: self.quiz_results.clone(),
        })
    }
}
