#[macro_use]
extern crate rocket;

use std::sync::Arc;

use rocket::serde::json::Json;
use rocket::{Build, Rocket};
use serde_json::{json, Value};

mod boot;
mod models;
mod recommend;
mod routes;
mod store;
mod validate;

use store::memory::MemStore;
use store::Store;

#[catch(400)]
fn bad_request() -> Json<Value> {
    Json(json!({"success": false, "error": "bad_request"}))
}

#[catch(404)]
fn not_found() -> Json<Value> {
    Json(json!({"success": false, "error": "not_found"}))
}

#[catch(422)]
fn unprocessable() -> Json<Value> {
    Json(json!({"success": false, "error": "invalid_body"}))
}

#[catch(500)]
fn server_error() -> Json<Value> {
    Json(json!({"success": false, "error": "internal"}))
}

/// Assemble the Rocket instance around an already-seeded store.
/// Kept separate from `rocket()` so tests can build one per case.
fn build_rocket(store: Arc<dyn Store>) -> Rocket<Build> {
    rocket::build()
        .manage(store)
        .mount("/api", routes::api::routes())
        .register(
            "/",
            catchers![bad_request, not_found, unprocessable, server_error],
        )
}

#[launch]
fn rocket() -> _ {
    env_logger::init();

    let store: Arc<dyn Store> = Arc::new(MemStore::new());

    // Boot check: verify the seeded data before serving anything
    boot::run(store.as_ref());

    build_rocket(store)
}
