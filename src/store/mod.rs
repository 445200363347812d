use crate::models::audit::{NewStackAudit, StackAuditRequest};
use crate::models::blog::BlogPost;
use crate::models::lead::{Lead, NewLead};
use crate::models::product::Product;
use crate::models::quiz::{NewQuizResponse, QuizQuestion, QuizResponse};
use crate::models::user::{NewUser, User};

pub mod memory;
pub mod seed;

/// Unified data-access trait. Every store operation goes through here.
/// Implementation: `MemStore` (process-lifetime, seeded at construction).
/// Collections are append-only; nothing exposes update or delete.
pub trait Store: Send + Sync {
    // ── Users ───────────────────────────────────────────────────────
    fn user_get(&self, id: &str) -> Option<User>;
    fn user_get_by_username(&self, username: &str) -> Option<User>;
    fn user_create(&self, user: &NewUser) -> Result<User, String>;

    // ── Leads ───────────────────────────────────────────────────────
    fn lead_get(&self, id: &str) -> Option<Lead>;
    fn lead_get_by_email(&self, email: &str) -> Option<Lead>;
    /// Insert a lead unless one with the same email already exists.
    /// Returns the stored lead and whether this call created it.
    fn lead_create_if_absent(&self, lead: &NewLead) -> Result<(Lead, bool), String>;
    fn lead_count(&self) -> usize;

    // ── Quiz ────────────────────────────────────────────────────────
    /// All seeded questions, ascending by their `order` field.
    fn quiz_questions(&self) -> Vec<QuizQuestion>;
    fn quiz_response_save(&self, response: &NewQuizResponse) -> Result<QuizResponse, String>;
    fn quiz_responses_for_lead(&self, lead_id: &str) -> Vec<QuizResponse>;
    fn quiz_response_count(&self) -> usize;

    // ── Products ────────────────────────────────────────────────────
    fn product_get(&self, id: &str) -> Option<Product>;
    /// Catalog, optionally filtered by category. `None` returns everything.
    fn product_list(&self, category: Option<&str>) -> Vec<Product>;
    fn product_featured(&self) -> Vec<Product>;

    // ── Blog ────────────────────────────────────────────────────────
    /// Posts newest-first, optionally filtered by category.
    fn blog_list(&self, category: Option<&str>) -> Vec<BlogPost>;
    fn blog_featured(&self) -> Option<BlogPost>;
    fn blog_find_by_slug(&self, slug: &str) -> Option<BlogPost>;

    // ── Stack audits ────────────────────────────────────────────────
    /// Store an audit request. Status is always written as pending here,
    /// whatever the caller submitted.
    fn audit_create(&self, audit: &NewStackAudit) -> Result<StackAuditRequest, String>;
    fn audit_get(&self, id: &str) -> Option<StackAuditRequest>;
    /// Intake queue, newest first.
    fn audit_list(&self) -> Vec<StackAuditRequest>;
    fn audit_count(&self) -> usize;
}
