/// Product creation service
///
/// Validates the request, stores the optional image first, then writes the
/// product document. A storage failure aborts the call so no document ever
/// references media that never landed.
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::Utc;
use firestore_shared::FirestoreClient;
use gcs_shared::StorageClient;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::{NewProductRequest, NewProductResponse};
use crate::services::publisher::{ONE_YEAR_CACHE_CONTROL, PRODUCT_IMAGES_PREFIX};

/// Collection the product documents land in
pub const PRODUCTS_COLLECTION: &str = "products";

pub const DEFAULT_CATEGORY: &str = "general";
const DEFAULT_UPLOADER: &str = "admin";

pub struct ProductService {
    storage: Arc<StorageClient>,
    firestore: Arc<FirestoreClient>,
}

impl ProductService {
    pub fn new(storage: Arc<StorageClient>, firestore: Arc<FirestoreClient>) -> Self {
        Self { storage, firestore }
    }

    /// Create one product, uploading its image when supplied
    pub async fn create_product(&self, req: &NewProductRequest) -> Result<NewProductResponse> {
        let name = match req.name.as_deref().map(str::trim) {
            Some(n) if !n.is_empty() => n,
            _ => {
                return Err(AppError::InvalidArgument(
                    "product name is required".to_string(),
                ))
            }
        };
        let price = parse_price(req.price.as_ref()).ok_or_else(|| {
            AppError::InvalidArgument("a numeric price is required".to_string())
        })?;

        let image_url = match (req.image_bytes.as_deref(), req.file_name.as_deref()) {
            (Some(encoded), Some(file_name)) => self.upload_image(encoded, file_name).await?,
            _ => String::new(),
        };

        let fields = product_fields(
            name,
            price,
            &image_url,
            req.description.as_deref(),
            req.category.as_deref(),
            parse_stock(req.stock.as_ref()),
        );

        let product_id = self
            .firestore
            .add_document(PRODUCTS_COLLECTION, &fields, &["createdAt", "updatedAt"])
            .await
            .map_err(|e| AppError::Internal(format!("Failed to store product: {}", e)))?;

        tracing::info!(%product_id, "Product created");

        Ok(NewProductResponse {
            success: true,
            product_id,
            image_url,
        })
    }

    async fn upload_image(&self, encoded: &str, file_name: &str) -> Result<String> {
        let bytes = BASE64
            .decode(encoded.trim())
            .map_err(|e| AppError::InvalidArgument(format!("image_bytes is not valid base64: {}", e)))?;

        let object_name = format!("{}{}", PRODUCT_IMAGES_PREFIX, file_name);

        let mut metadata = HashMap::new();
        metadata.insert("uploadedBy".to_string(), DEFAULT_UPLOADER.to_string());
        metadata.insert("uploadedAt".to_string(), Utc::now().to_rfc3339());
        metadata.insert("public".to_string(), "true".to_string());

        self.storage
            .upload_object(
                &object_name,
                bytes,
                "image/jpeg",
                ONE_YEAR_CACHE_CONTROL,
                &metadata,
            )
            .await
            .map_err(|e| AppError::Internal(format!("Image upload failed: {}", e)))?;

        self.storage
            .make_public(&object_name)
            .await
            .map_err(|e| AppError::Internal(format!("Image publish failed: {}", e)))?;

        Ok(self.storage.public_url(&object_name))
    }
}

/// Accept a JSON number or a numeric string; reject anything non-finite
pub fn parse_price(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|p| p.is_finite())
}

/// Accept a JSON number or a numeric string; anything else means zero stock
pub fn parse_stock(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse::<i64>().unwrap_or(0),
        _ => 0,
    }
}

/// Field map for the product document, defaults applied
pub fn product_fields(
    name: &str,
    price: f64,
    image_url: &str,
    description: Option<&str>,
    category: Option<&str>,
    stock: i64,
) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert("name".to_string(), Value::from(name));
    fields.insert("price".to_string(), Value::from(price));
    fields.insert("imageUrl".to_string(), Value::from(image_url));
    fields.insert(
        "description".to_string(),
        Value::from(description.unwrap_or("")),
    );
    fields.insert(
        "category".to_string(),
        Value::from(category.unwrap_or(DEFAULT_CATEGORY)),
    );
    fields.insert("stock".to_string(), Value::from(stock));
    fields.insert("isActive".to_string(), Value::from(true));
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_price_variants() {
        assert_eq!(parse_price(Some(&json!(19.99))), Some(19.99));
        assert_eq!(parse_price(Some(&json!("19.99"))), Some(19.99));
        assert_eq!(parse_price(Some(&json!(" 5 "))), Some(5.0));
        assert_eq!(parse_price(Some(&json!("not a price"))), None);
        assert_eq!(parse_price(Some(&json!("NaN"))), None);
        assert_eq!(parse_price(Some(&json!(null))), None);
        assert_eq!(parse_price(None), None);
    }

    #[test]
    fn test_parse_stock_variants() {
        assert_eq!(parse_stock(Some(&json!(7))), 7);
        assert_eq!(parse_stock(Some(&json!("12"))), 12);
        assert_eq!(parse_stock(Some(&json!("lots"))), 0);
        assert_eq!(parse_stock(None), 0);
    }

    #[test]
    fn test_product_fields_defaults() {
        let fields = product_fields("Wheel", 19.99, "", None, None, 0);

        assert_eq!(fields["name"], json!("Wheel"));
        assert_eq!(fields["price"], json!(19.99));
        assert_eq!(fields["imageUrl"], json!(""));
        assert_eq!(fields["description"], json!(""));
        assert_eq!(fields["category"], json!(DEFAULT_CATEGORY));
        assert_eq!(fields["stock"], json!(0));
        assert_eq!(fields["isActive"], json!(true));
    }

    #[test]
    fn test_product_fields_explicit_values() {
        let fields = product_fields(
            "Wheel",
            19.99,
            "https://storage.googleapis.com/b/product_images/wheel.jpg",
            Some("Alloy wheel"),
            Some("wheels"),
            4,
        );

        assert_eq!(fields["description"], json!("Alloy wheel"));
        assert_eq!(fields["category"], json!("wheels"));
        assert_eq!(fields["stock"], json!(4));
        assert_eq!(
            fields["imageUrl"],
            json!("https://storage.googleapis.com/b/product_images/wheel.jpg")
        );
    }
}
