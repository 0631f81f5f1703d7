use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Request to create a product, optionally with inline image bytes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProductRequest {
    pub name: Option<String>,
    /// Number or numeric string; parsed to a float before storage
    pub price: Option<serde_json::Value>,
    /// Base64-encoded image payload
    pub image_bytes: Option<String>,
    pub file_name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    /// Number or numeric string; parsed to an integer before storage
    pub stock: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProductResponse {
    pub success: bool,
    pub product_id: String,
    /// Empty string when the product was created without an image
    pub image_url: String,
}

/// Finalize event payload for a storage object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageObjectEvent {
    pub bucket: Option<String>,
    pub name: Option<String>,
    pub content_type: Option<String>,
    pub metadata: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishEventResponse {
    pub success: bool,
    /// Whether the object was actually made public by this invocation
    pub published: bool,
}
