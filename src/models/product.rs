use serde::{Deserialize, Serialize};

/// Catalog entry for an affiliate product. Seeded at startup, never mutated.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub description: String,
    pub benefits: Vec<String>,
    pub price: String,
    pub affiliate_url: String,
    pub rating: String,
    pub review_count: i32,
    pub image_url: Option<String>,
    pub featured: bool,
}
