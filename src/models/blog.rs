use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Published article. Seeded at startup, never mutated; `slug` is unique.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub image_url: Option<String>,
    pub read_time: i32,
    pub author: String,
    pub featured: bool,
    pub published_at: DateTime<Utc>,
    pub slug: String,
}
