/// Unit tests for catalog-service models
///
/// This test module covers:
/// - Request/response serialization shapes
/// - Finalize-event payload tolerance (missing fields)
use catalog_service::models::*;

#[test]
fn test_product_request_accepts_number_and_string_price() {
    let with_number: NewProductRequest =
        serde_json::from_value(serde_json::json!({ "name": "Wheel", "price": 19.99 })).unwrap();
    assert!(with_number.price.as_ref().unwrap().is_number());

    let with_string: NewProductRequest =
        serde_json::from_value(serde_json::json!({ "name": "Wheel", "price": "19.99" })).unwrap();
    assert!(with_string.price.as_ref().unwrap().is_string());
}

#[test]
fn test_product_request_optional_fields_default_to_none() {
    let req: NewProductRequest =
        serde_json::from_value(serde_json::json!({ "name": "Wheel", "price": 1 })).unwrap();
    assert!(req.image_bytes.is_none());
    assert!(req.file_name.is_none());
    assert!(req.description.is_none());
    assert!(req.category.is_none());
    assert!(req.stock.is_none());
}

#[test]
fn test_storage_event_tolerates_sparse_payloads() {
    let event: StorageObjectEvent = serde_json::from_value(serde_json::json!({})).unwrap();
    assert!(event.name.is_none());
    assert!(event.metadata.is_none());

    let event: StorageObjectEvent = serde_json::from_value(serde_json::json!({
        "name": "product_images/wheel.jpg",
        "content_type": "image/jpeg",
        "metadata": { "uploadedBy": "admin" }
    }))
    .unwrap();
    assert_eq!(event.name.as_deref(), Some("product_images/wheel.jpg"));
    assert_eq!(
        event.metadata.unwrap().get("uploadedBy").map(String::as_str),
        Some("admin")
    );
}

#[test]
fn test_product_response_round_trip() {
    let response = NewProductResponse {
        success: true,
        product_id: "AbCdEfGhIjKlMnOpQrSt".to_string(),
        image_url: String::new(),
    };

    let json = serde_json::to_string(&response).unwrap();
    let parsed: NewProductResponse = serde_json::from_str(&json).unwrap();
    assert!(parsed.success);
    assert_eq!(parsed.product_id.len(), 20);
    assert_eq!(parsed.image_url, "");
}
