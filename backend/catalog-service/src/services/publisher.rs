/// Product image publisher
///
/// Flips visibility of product media to public and stamps the cache/marker
/// metadata. Used by the finalize-event handler and the offline
/// republishing binary.
use chrono::Utc;
use gcs_shared::{GcsError, StorageClient};
use std::collections::HashMap;
use std::sync::Arc;

/// Prefix under which product media lives in the bucket
pub const PRODUCT_IMAGES_PREFIX: &str = "product_images/";

/// Product images are immutable; cache them for a year
pub const ONE_YEAR_CACHE_CONTROL: &str = "public, max-age=31536000";

pub struct ImagePublisher {
    storage: Arc<StorageClient>,
}

impl ImagePublisher {
    pub fn new(storage: Arc<StorageClient>) -> Self {
        Self { storage }
    }

    /// Whether an object path belongs to the product media prefix
    pub fn is_product_image(object_name: &str) -> bool {
        object_name.starts_with(PRODUCT_IMAGES_PREFIX)
    }

    /// Make one object public and merge the cache/marker metadata
    ///
    /// Existing custom metadata is carried over, not replaced. Safe to call
    /// again on an already-public object.
    pub async fn publish(
        &self,
        object_name: &str,
        existing_metadata: Option<&HashMap<String, String>>,
    ) -> Result<(), GcsError> {
        self.storage.make_public(object_name).await?;

        let mut metadata = existing_metadata.cloned().unwrap_or_default();
        metadata.insert("public".to_string(), "true".to_string());
        metadata.insert("madePublicAt".to_string(), Utc::now().to_rfc3339());

        self.storage
            .patch_metadata(object_name, ONE_YEAR_CACHE_CONTROL, &metadata)
            .await?;

        Ok(())
    }
}
