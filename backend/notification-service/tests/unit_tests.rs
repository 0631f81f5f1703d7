/// Unit tests for notification-service core functionality
///
/// This test module covers:
/// - Multi-channel payload construction
/// - Token list partitioning at the platform batch ceiling
/// - Request validation before any dispatch
use notification_service::models::*;
use notification_service::services::{build_push_message, CLICK_ACTION, FCM_BATCH_LIMIT};

#[test]
fn test_payload_carries_click_action_and_echoes_text() {
    let message = build_push_message(Some("device-1".to_string()), "Sale", "20% off", None, None);

    let data = message.data.as_ref().unwrap();
    assert_eq!(data.get("click_action").map(String::as_str), Some(CLICK_ACTION));
    assert_eq!(data.get("title").map(String::as_str), Some("Sale"));
    assert_eq!(data.get("body").map(String::as_str), Some("20% off"));
    assert_eq!(message.token.as_deref(), Some("device-1"));
    assert_eq!(message.notification.title, "Sale");
}

#[test]
fn test_image_url_lands_in_all_sections() {
    let message = build_push_message(
        None,
        "Sale",
        "20% off",
        Some("https://cdn.example.com/banner.jpg"),
        None,
    );

    assert_eq!(
        message.notification.image.as_deref(),
        Some("https://cdn.example.com/banner.jpg")
    );
    assert_eq!(
        message.data.as_ref().unwrap().get("image_url").map(String::as_str),
        Some("https://cdn.example.com/banner.jpg")
    );
    assert_eq!(
        message
            .webpush
            .as_ref()
            .unwrap()
            .notification
            .image
            .as_deref(),
        Some("https://cdn.example.com/banner.jpg")
    );
}

#[test]
fn test_no_image_means_no_image_anywhere() {
    let message = build_push_message(None, "Sale", "20% off", None, None);

    assert!(message.notification.image.is_none());
    assert!(!message.data.as_ref().unwrap().contains_key("image_url"));
    assert!(message.webpush.as_ref().unwrap().notification.image.is_none());
}

#[test]
fn test_extra_data_merges_but_cannot_override_click_action() {
    let mut extra = std::collections::HashMap::new();
    extra.insert("order_id".to_string(), "o-42".to_string());
    extra.insert("click_action".to_string(), "SOMETHING_ELSE".to_string());

    let message = build_push_message(None, "Sale", "20% off", None, Some(&extra));

    let data = message.data.as_ref().unwrap();
    assert_eq!(data.get("order_id").map(String::as_str), Some("o-42"));
    assert_eq!(data.get("click_action").map(String::as_str), Some(CLICK_ACTION));
}

#[test]
fn test_mobile_delivery_hints() {
    let message = build_push_message(None, "Sale", "20% off", None, None);

    let android = message.android.as_ref().unwrap();
    assert_eq!(android.priority, "HIGH");
    assert!(android.notification.default_sound);

    let apns = message.apns.as_ref().unwrap();
    assert_eq!(
        apns.headers.get("apns-priority").map(String::as_str),
        Some("10")
    );
    assert_eq!(apns.payload.aps.badge, 1);
    assert_eq!(apns.payload.aps.content_available, 1);
}

fn tokens(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("device-{i}")).collect()
}

#[test]
fn test_partition_at_exact_batch_limit() {
    let list = tokens(500);
    let chunks: Vec<_> = list.chunks(FCM_BATCH_LIMIT).collect();
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].len(), 500);
}

#[test]
fn test_partition_one_past_batch_limit() {
    let list = tokens(501);
    let chunks: Vec<_> = list.chunks(FCM_BATCH_LIMIT).collect();
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].len(), 500);
    assert_eq!(chunks[1].len(), 1);
}

#[test]
fn test_partition_two_full_chunks() {
    let list = tokens(1000);
    let chunks: Vec<_> = list.chunks(FCM_BATCH_LIMIT).collect();
    assert_eq!(chunks.len(), 2);
    assert!(chunks.iter().all(|c| c.len() == 500));
    assert_eq!(chunks.iter().map(|c| c.len()).sum::<usize>(), 1000);
}

#[test]
fn test_batch_request_deserializes() {
    let raw = serde_json::json!({
        "tokens": ["a", "b"],
        "title": "Sale",
        "body": "20% off"
    });
    let req: SendPushBatchRequest = serde_json::from_value(raw).unwrap();
    assert_eq!(req.tokens.as_ref().unwrap().len(), 2);
    assert!(req.image_url.is_none());
    assert!(req.data.is_none());
}
