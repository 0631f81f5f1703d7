/// Push dispatch service
///
/// Builds the multi-channel FCM payload and hands it to the messaging
/// client, either for one device or fanned out over a token list in
/// platform-sized chunks.
use fcm_shared::models::{
    AndroidConfig, AndroidNotification, Aps, ApsAlert, ApnsConfig, ApnsPayload, FcmMessage,
    FcmNotification, WebpushConfig, WebpushNotification,
};
use fcm_shared::FcmClient;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

use crate::error::{AppError, Result};
use crate::models::{
    SendPushBatchRequest, SendPushBatchResponse, SendPushRequest, SendPushResponse,
};

/// Batch ceiling the messaging platform imposes on one multicast call
pub const FCM_BATCH_LIMIT: usize = 500;

/// Marker the mobile client uses to route notification taps
pub const CLICK_ACTION: &str = "FLUTTER_NOTIFICATION_CLICK";

pub struct PushDispatcher {
    fcm: Arc<FcmClient>,
}

impl PushDispatcher {
    pub fn new(fcm: Arc<FcmClient>) -> Self {
        Self { fcm }
    }

    /// Send one push to one device
    pub async fn send_single(&self, req: &SendPushRequest) -> Result<SendPushResponse> {
        let token = require_field(req.token.as_deref(), "token")?;
        let title = require_field(req.title.as_deref(), "title")?;
        let body = require_field(req.body.as_deref(), "body")?;

        let message = build_push_message(
            Some(token.to_string()),
            title,
            body,
            req.image_url.as_deref(),
            req.data.as_ref(),
        );

        let result = self
            .fcm
            .send(&message)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to send notification: {}", e)))?;

        Ok(SendPushResponse {
            success: true,
            message_id: result.message_id,
        })
    }

    /// Fan one push out to a token list
    ///
    /// Chunks are dispatched strictly one after another. A chunk whose
    /// dispatch fails outright counts its whole length as failures and the
    /// loop moves on; there is no retry.
    pub async fn send_batch(&self, req: &SendPushBatchRequest) -> Result<SendPushBatchResponse> {
        let tokens = match req.tokens.as_deref() {
            Some(tokens) if !tokens.is_empty() => tokens,
            _ => {
                return Err(AppError::InvalidArgument(
                    "a non-empty token list is required".to_string(),
                ))
            }
        };
        let title = require_field(req.title.as_deref(), "title")?;
        let body = require_field(req.body.as_deref(), "body")?;

        let message = build_push_message(None, title, body, req.image_url.as_deref(), req.data.as_ref());

        let mut success_count = 0;
        let mut failure_count = 0;

        for chunk in tokens.chunks(FCM_BATCH_LIMIT) {
            match self.fcm.send_each(chunk, &message).await {
                Ok(batch) => {
                    success_count += batch.success_count;
                    failure_count += batch.failure_count;
                }
                Err(e) => {
                    warn!("Push chunk of {} tokens failed: {}", chunk.len(), e);
                    failure_count += chunk.len();
                }
            }
        }

        Ok(SendPushBatchResponse {
            success: true,
            success_count,
            failure_count,
            total_tokens: tokens.len(),
        })
    }
}

fn require_field<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::InvalidArgument(format!("{} is required", name))),
    }
}

/// Assemble the multi-channel message payload
///
/// The data map echoes title/body, carries the caller's extra entries, and
/// always ends with the fixed click-action marker; the image URL rides in
/// the visual sections and the data map both.
pub fn build_push_message(
    token: Option<String>,
    title: &str,
    body: &str,
    image_url: Option<&str>,
    extra: Option<&HashMap<String, String>>,
) -> FcmMessage {
    let mut data: HashMap<String, String> = HashMap::new();
    data.insert("title".to_string(), title.to_string());
    data.insert("body".to_string(), body.to_string());
    if let Some(extra) = extra {
        for (key, value) in extra {
            data.insert(key.clone(), value.clone());
        }
    }
    data.insert("click_action".to_string(), CLICK_ACTION.to_string());
    if let Some(image) = image_url {
        data.insert("image_url".to_string(), image.to_string());
    }

    let mut apns_headers = HashMap::new();
    apns_headers.insert("apns-priority".to_string(), "10".to_string());
    apns_headers.insert("apns-push-type".to_string(), "alert".to_string());

    FcmMessage {
        token,
        notification: FcmNotification {
            title: title.to_string(),
            body: body.to_string(),
            image: image_url.map(str::to_string),
        },
        data: Some(data),
        android: Some(AndroidConfig {
            priority: "HIGH".to_string(),
            notification: AndroidNotification {
                sound: "default".to_string(),
                default_sound: true,
                default_vibrate_timings: true,
                default_light_settings: true,
                notification_priority: "PRIORITY_HIGH".to_string(),
            },
        }),
        apns: Some(ApnsConfig {
            headers: apns_headers,
            payload: ApnsPayload {
                aps: Aps {
                    alert: ApsAlert {
                        title: title.to_string(),
                        body: body.to_string(),
                    },
                    sound: "default".to_string(),
                    badge: 1,
                    content_available: 1,
                },
            },
        }),
        webpush: Some(WebpushConfig {
            notification: WebpushNotification {
                title: title.to_string(),
                body: body.to_string(),
                image: image_url.map(str::to_string),
            },
        }),
    }
}
