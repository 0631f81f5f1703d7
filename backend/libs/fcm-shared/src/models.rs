use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// FCM Send Request (request envelope)
#[derive(Debug, Serialize)]
pub struct FcmSendRequest {
    pub message: FcmMessage,
}

/// FCM Message
///
/// Data values must be strings: the wire contract rejects non-string map
/// entries, so callers flatten anything structured before it lands here.
#[derive(Debug, Clone, Serialize)]
pub struct FcmMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub notification: FcmNotification,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android: Option<AndroidConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apns: Option<ApnsConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webpush: Option<WebpushConfig>,
}

/// FCM Notification Payload
#[derive(Debug, Clone, Serialize)]
pub struct FcmNotification {
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Android delivery section
#[derive(Debug, Clone, Serialize)]
pub struct AndroidConfig {
    pub priority: String,
    pub notification: AndroidNotification,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidNotification {
    pub sound: String,
    pub default_sound: bool,
    pub default_vibrate_timings: bool,
    pub default_light_settings: bool,
    pub notification_priority: String,
}

/// APNs delivery section
#[derive(Debug, Clone, Serialize)]
pub struct ApnsConfig {
    pub headers: HashMap<String, String>,
    pub payload: ApnsPayload,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApnsPayload {
    pub aps: Aps,
}

#[derive(Debug, Clone, Serialize)]
pub struct Aps {
    pub alert: ApsAlert,
    pub sound: String,
    pub badge: i64,
    #[serde(rename = "content-available")]
    pub content_available: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApsAlert {
    pub title: String,
    pub body: String,
}

/// Webpush delivery section
#[derive(Debug, Clone, Serialize)]
pub struct WebpushConfig {
    pub notification: WebpushNotification,
}

#[derive(Debug, Clone, Serialize)]
pub struct WebpushNotification {
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// FCM API Response
#[derive(Debug, Deserialize)]
pub struct FcmApiResponse {
    pub name: Option<String>,
}

/// Single-send result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FcmSendResult {
    pub message_id: String,
    pub success: bool,
    pub error: Option<String>,
}

/// Per-token fan-out result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FcmBatchResult {
    pub success_count: usize,
    pub failure_count: usize,
    pub results: Vec<FcmSendResult>,
}
