use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Request to push to a single device
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendPushRequest {
    pub token: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub image_url: Option<String>,
    /// Free-form key/value entries merged into the data payload
    pub data: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendPushResponse {
    pub success: bool,
    pub message_id: String,
}

/// Request to fan a push out to many devices
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendPushBatchRequest {
    pub tokens: Option<Vec<String>>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub image_url: Option<String>,
    pub data: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendPushBatchResponse {
    pub success: bool,
    pub success_count: usize,
    pub failure_count: usize,
    pub total_tokens: usize,
}
