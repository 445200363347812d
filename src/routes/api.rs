use std::sync::Arc;

use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::State;
use serde_json::{json, Value};

use crate::models::audit::StackAuditForm;
use crate::models::blog::BlogPost;
use crate::models::lead::LeadForm;
use crate::models::product::Product;
use crate::models::quiz::{QuizQuestion, QuizResponseForm};
use crate::recommend;
use crate::store::Store;
use crate::validate::FieldErrors;

type ApiResult = Result<Json<Value>, Custom<Json<Value>>>;

fn validation_failed(fields: FieldErrors) -> Custom<Json<Value>> {
    Custom(
        Status::BadRequest,
        Json(json!({
            "success": false,
            "error": "validation_failed",
            "fields": fields,
        })),
    )
}

fn store_failed(detail: String) -> Custom<Json<Value>> {
    log::error!("store operation failed: {}", detail);
    Custom(
        Status::InternalServerError,
        Json(json!({"success": false, "error": "internal"})),
    )
}

// ── Lead capture ───────────────────────────────────────

#[post("/leads", format = "json", data = "<form>")]
pub fn lead_create(store: &State<Arc<dyn Store>>, form: Json<LeadForm>) -> ApiResult {
    let new_lead = form.validate().map_err(validation_failed)?;

    let (lead, created) = store
        .lead_create_if_absent(&new_lead)
        .map_err(store_failed)?;

    if created {
        Ok(Json(json!({"success": true, "lead": lead})))
    } else {
        Ok(Json(json!({
            "success": true,
            "lead": lead,
            "message": "Already subscribed",
        })))
    }
}

// ── Quiz ───────────────────────────────────────────────

#[get("/quiz/questions")]
pub fn quiz_questions(store: &State<Arc<dyn Store>>) -> Json<Vec<QuizQuestion>> {
    Json(store.quiz_questions())
}

#[post("/quiz/responses", format = "json", data = "<form>")]
pub fn quiz_response_submit(
    store: &State<Arc<dyn Store>>,
    form: Json<QuizResponseForm>,
) -> ApiResult {
    let new_response = form.validate().map_err(validation_failed)?;

    let response = store
        .quiz_response_save(&new_response)
        .map_err(store_failed)?;

    Ok(Json(json!({"success": true, "response": response})))
}

#[get("/quiz/results/<lead_id>")]
pub fn quiz_results(store: &State<Arc<dyn Store>>, lead_id: &str) -> Json<Value> {
    let responses = store.quiz_responses_for_lead(lead_id);
    let recommendations = recommend::recommend(&responses);

    Json(json!({
        "responses": responses,
        "recommendations": recommendations,
    }))
}

// ── Products ───────────────────────────────────────────

#[get("/products?<category>")]
pub fn product_list(
    store: &State<Arc<dyn Store>>,
    category: Option<&str>,
) -> Json<Vec<Product>> {
    // An empty ?category= means no filter, same as leaving it off.
    let category = category.filter(|c| !c.is_empty());
    Json(store.product_list(category))
}

#[get("/products/featured")]
pub fn product_featured(store: &State<Arc<dyn Store>>) -> Json<Vec<Product>> {
    Json(store.product_featured())
}

// ── Blog ───────────────────────────────────────────────

#[get("/blog?<category>")]
pub fn blog_list(store: &State<Arc<dyn Store>>, category: Option<&str>) -> Json<Vec<BlogPost>> {
    let category = category.filter(|c| !c.is_empty());
    Json(store.blog_list(category))
}

#[get("/blog/featured")]
pub fn blog_featured(store: &State<Arc<dyn Store>>) -> Json<Option<BlogPost>> {
    Json(store.blog_featured())
}

#[get("/blog/<slug>", rank = 5)]
pub fn blog_single(store: &State<Arc<dyn Store>>, slug: &str) -> Option<Json<BlogPost>> {
    store.blog_find_by_slug(slug).map(Json)
}

// ── Stack audit intake ─────────────────────────────────

#[post("/stack-audit", format = "json", data = "<form>")]
pub fn stack_audit_create(
    store: &State<Arc<dyn Store>>,
    form: Json<StackAuditForm>,
) -> ApiResult {
    let new_audit = form.validate().map_err(validation_failed)?;

    let request = store.audit_create(&new_audit).map_err(store_failed)?;

    Ok(Json(json!({"success": true, "request": request})))
}

// ── Health ─────────────────────────────────────────────

#[get("/health")]
pub fn health(store: &State<Arc<dyn Store>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "questions": store.quiz_questions().len(),
        "products": store.product_list(None).len(),
        "posts": store.blog_list(None).len(),
        "leads": store.lead_count(),
        "responses": store.quiz_response_count(),
        "audits": store.audit_count(),
    }))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![
        lead_create,
        quiz_questions,
        quiz_response_submit,
        quiz_results,
        product_list,
        product_featured,
        blog_list,
        blog_featured,
        blog_single,
        stack_audit_create,
        health,
    ]
}
