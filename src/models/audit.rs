use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validate::{FieldErrors, Validator};

/// Monthly budget brackets offered on the audit intake form.
pub const BUDGET_BRACKETS: &[&str] = &[
    "under-50",
    "50-100",
    "100-150",
    "150-200",
    "over-200",
    "flexible",
];

/// Workflow state for an audit request. Requests are created as `Pending`;
/// no code path transitions them further yet.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuditStatus {
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StackAuditRequest {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub current_supplements: String,
    pub health_goals: String,
    pub challenges: String,
    pub budget: Option<String>,
    pub status: AuditStatus,
    pub created_at: DateTime<Utc>,
}

/// Wire form for `POST /api/stack-audit`. Any `status` the caller sends is
/// ignored; creation always starts at `Pending`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackAuditForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub current_supplements: Option<String>,
    pub health_goals: Option<String>,
    pub challenges: Option<String>,
    pub budget: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewStackAudit {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub current_supplements: String,
    pub health_goals: String,
    pub challenges: String,
    pub budget: Option<String>,
}

impl StackAuditForm {
    pub fn validate(&self) -> Result<NewStackAudit, FieldErrors> {
        let mut v = Validator::new();
        v.require("firstName", self.first_name.as_deref());
        v.require("lastName", self.last_name.as_deref());
        v.require_email("email", self.email.as_deref());
        v.require("currentSupplements", self.current_supplements.as_deref());
        v.require("healthGoals", self.health_goals.as_deref());
        v.require("challenges", self.challenges.as_deref());
        v.one_of_optional("budget", self.budget.as_deref(), BUDGET_BRACKETS);
        v.finish()?;

        Ok(NewStackAudit {
            first_name: self.first_name.clone().unwrap_or_default().trim().to_string(),
            last_name: self.last_name.clone().unwrap_or_default().trim().to_string(),
            email: self.email.clone().unwrap_or_default().trim().to_string(),
            phone: self.phone.clone().filter(|p| !p.trim().is_empty()),
            current_supplements: self.current_supplements.clone().unwrap_or_default(),
            health_goals: self.health_goals.clone().unwrap_or_default(),
            challenges: self.challenges.clone().unwrap_or_default(),
            budget: self.budget.clone().filter(|b| !b.is_empty()),
        })
    }
}
