use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Storage object resource (subset of the JSON API representation)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageObject {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_control: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
}

/// Response of an objects.list call
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListObjectsResponse {
    #[serde(default)]
    pub items: Vec<StorageObject>,
    pub next_page_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_without_items() {
        // Empty prefixes come back with no `items` key at all.
        let parsed: ListObjectsResponse = serde_json::from_str(r#"{"kind": "storage#objects"}"#).unwrap();
        assert!(parsed.items.is_empty());
        assert!(parsed.next_page_token.is_none());
    }

    #[test]
    fn test_object_camel_case_fields() {
        let raw = r#"{
            "name": "product_images/wheel.jpg",
            "bucket": "shop-media",
            "contentType": "image/jpeg",
            "cacheControl": "public, max-age=31536000",
            "metadata": {"public": "true"}
        }"#;

        let object: StorageObject = serde_json::from_str(raw).unwrap();
        assert_eq!(object.content_type.as_deref(), Some("image/jpeg"));
        assert_eq!(
            object.cache_control.as_deref(),
            Some("public, max-age=31536000")
        );
        assert_eq!(
            object.metadata.unwrap().get("public").map(String::as_str),
            Some("true")
        );
    }
}
