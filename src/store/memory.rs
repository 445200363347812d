use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use crate::models::audit::{AuditStatus, NewStackAudit, StackAuditRequest};
use crate::models::blog::BlogPost;
use crate::models::lead::{Lead, NewLead};
use crate::models::product::Product;
use crate::models::quiz::{NewQuizResponse, QuizQuestion, QuizResponse};
use crate::models::user::{NewUser, User};
use crate::store::{seed, Store};

/// Process-lifetime store. The seeded collections (questions, products,
/// posts) are fixed at construction and need no locking; the transactional
/// collections grow append-only behind `DashMap`s. Unique keys (lead email,
/// username) are kept in index maps whose entry locks make insert-if-absent
/// atomic under concurrent submissions.
pub struct MemStore {
    users: DashMap<String, User>,
    usernames: DashMap<String, String>,
    leads: DashMap<String, Lead>,
    lead_emails: DashMap<String, String>,
    quiz_responses: DashMap<String, QuizResponse>,
    audits: DashMap<String, StackAuditRequest>,
    questions: Vec<QuizQuestion>,
    products: Vec<Product>,
    posts: Vec<BlogPost>,
}

impl MemStore {
    pub fn new() -> Self {
        MemStore {
            users: DashMap::new(),
            usernames: DashMap::new(),
            leads: DashMap::new(),
            lead_emails: DashMap::new(),
            quiz_responses: DashMap::new(),
            audits: DashMap::new(),
            questions: seed::quiz_questions(),
            products: seed::products(),
            posts: seed::blog_posts(),
        }
    }

    fn new_id() -> String {
        Uuid::new_v4().to_string()
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for MemStore {
    // ── Users ───────────────────────────────────────────────────────

    fn user_get(&self, id: &str) -> Option<User> {
        self.users.get(id).map(|u| u.value().clone())
    }

    fn user_get_by_username(&self, username: &str) -> Option<User> {
        let id = self.usernames.get(username)?.value().clone();
        self.users.get(&id).map(|u| u.value().clone())
    }

    fn user_create(&self, user: &NewUser) -> Result<User, String> {
        match self.usernames.entry(user.username.clone()) {
            Entry::Occupied(_) => Err(format!("username '{}' is already taken", user.username)),
            Entry::Vacant(slot) => {
                let record = User {
                    id: Self::new_id(),
                    username: user.username.clone(),
                    password: user.password.clone(),
                };
                self.users.insert(record.id.clone(), record.clone());
                slot.insert(record.id.clone());
                Ok(record)
            }
        }
    }

    // ── Leads ───────────────────────────────────────────────────────

    fn lead_get(&self, id: &str) -> Option<Lead> {
        self.leads.get(id).map(|l| l.value().clone())
    }

    fn lead_get_by_email(&self, email: &str) -> Option<Lead> {
        let id = self.lead_emails.get(email)?.value().clone();
        self.leads.get(&id).map(|l| l.value().clone())
    }

    fn lead_create_if_absent(&self, lead: &NewLead) -> Result<(Lead, bool), String> {
        // The entry lock covers both the existence check and the insert, so
        // two concurrent submissions with the same email yield one record.
        match self.lead_emails.entry(lead.email.clone()) {
            Entry::Occupied(slot) => {
                let id = slot.get().clone();
                let existing = self
                    .leads
                    .get(&id)
                    .map(|l| l.value().clone())
                    .ok_or_else(|| format!("lead index points at missing record {}", id))?;
                Ok((existing, false))
            }
            Entry::Vacant(slot) => {
                let record = Lead {
                    id: Self::new_id(),
                    first_name: lead.first_name.clone(),
                    email: lead.email.clone(),
                    source: lead.source.clone(),
                    quiz_results: lead.quiz_results.clone(),
                    created_at: Utc::now(),
                };
                // Record first, index second: a reader that wins the entry
                // lock after us must find the lead behind the index.
                self.leads.insert(record.id.clone(), record.clone());
                slot.insert(record.id.clone());
                Ok((record, true))
            }
        }
    }

    fn lead_count(&self) -> usize {
        self.leads.len()
    }

    // ── Quiz ────────────────────────────────────────────────────────

    fn quiz_questions(&self) -> Vec<QuizQuestion> {
        let mut questions = self.questions.clone();
        questions.sort_by_key(|q| q.order);
        questions
    }

    fn quiz_response_save(&self, response: &NewQuizResponse) -> Result<QuizResponse, String> {
        let record = QuizResponse {
            id: Self::new_id(),
            lead_id: response.lead_id.clone(),
            question_id: response.question_id.clone(),
            answer: response.answer.clone(),
            created_at: Utc::now(),
        };
        self.quiz_responses.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn quiz_responses_for_lead(&self, lead_id: &str) -> Vec<QuizResponse> {
        let mut responses: Vec<QuizResponse> = self
            .quiz_responses
            .iter()
            .filter(|r| r.lead_id.as_deref() == Some(lead_id))
            .map(|r| r.value().clone())
            .collect();
        responses.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        responses
    }

    fn quiz_response_count(&self) -> usize {
        self.quiz_responses.len()
    }

    // ── Products ────────────────────────────────────────────────────

    fn product_get(&self, id: &str) -> Option<Product> {
        self.products.iter().find(|p| p.id == id).cloned()
    }

    fn product_list(&self, category: Option<&str>) -> Vec<Product> {
        match category {
            Some(c) => self
                .products
                .iter()
                .filter(|p| p.category == c)
                .cloned()
                .collect(),
            None => self.products.clone(),
        }
    }

    fn product_featured(&self) -> Vec<Product> {
        self.products.iter().filter(|p| p.featured).cloned().collect()
    }

    // ── Blog ────────────────────────────────────────────────────────

    fn blog_list(&self, category: Option<&str>) -> Vec<BlogPost> {
        let mut posts: Vec<BlogPost> = match category {
            Some(c) => self
                .posts
                .iter()
                .filter(|p| p.category == c)
                .cloned()
                .collect(),
            None => self.posts.clone(),
        };
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        posts
    }

    fn blog_featured(&self) -> Option<BlogPost> {
        self.posts.iter().find(|p| p.featured).cloned()
    }

    fn blog_find_by_slug(&self, slug: &str) -> Option<BlogPost> {
        self.posts.iter().find(|p| p.slug == slug).cloned()
    }

    // ── Stack audits ────────────────────────────────────────────────

    fn audit_create(&self, audit: &NewStackAudit) -> Result<StackAuditRequest, String> {
        let record = StackAuditRequest {
            id: Self::new_id(),
            first_name: audit.first_name.clone(),
            last_name: audit.last_name.clone(),
            email: audit.email.clone(),
            phone: audit.phone.clone(),
            current_supplements: audit.current_supplements.clone(),
            health_goals: audit.health_goals.clone(),
            challenges: audit.challenges.clone(),
            budget: audit.budget.clone(),
            status: AuditStatus::Pending,
            created_at: Utc::now(),
        };
        self.audits.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn audit_get(&self, id: &str) -> Option<StackAuditRequest> {
        self.audits.get(id).map(|a| a.value().clone())
    }

    fn audit_list(&self) -> Vec<StackAuditRequest> {
        let mut requests: Vec<StackAuditRequest> =
            self.audits.iter().map(|a| a.value().clone()).collect();
        requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        requests
    }

    fn audit_count(&self) -> usize {
        self.audits.len()
    }
}
