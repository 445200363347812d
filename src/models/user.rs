use serde::{Deserialize, Serialize};

/// Registered account. Created through the store only; no route exposes
/// registration yet, so there is no wire form for it.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}
