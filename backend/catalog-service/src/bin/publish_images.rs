use catalog_service::services::{ImagePublisher, PRODUCT_IMAGES_PREFIX};
use catalog_service::Config;
use gcp_auth_shared::ServiceAccountKey;
use gcs_shared::StorageClient;
use std::sync::Arc;

/// One-shot republish of every product image.
///
/// - Lists all objects under the product media prefix.
/// - Makes each public and merges the cache/marker metadata, the same way
///   the finalize-event handler does.
/// - Per-object failures are counted, not fatal; a listing failure exits 1.
///
/// Env vars reused from catalog-service:
/// STORAGE_BUCKET, GOOGLE_APPLICATION_CREDENTIALS (or GCP_* variables).
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    let credentials = ServiceAccountKey::load(config.gcp.credentials_path.as_deref())?;

    let storage = Arc::new(StorageClient::new(config.gcp.bucket.clone(), credentials));
    let publisher = ImagePublisher::new(storage.clone());

    println!(
        "Republishing objects under {} in bucket {}",
        PRODUCT_IMAGES_PREFIX, config.gcp.bucket
    );

    let objects = storage.list_objects(PRODUCT_IMAGES_PREFIX).await?;
    println!("Found {} objects", objects.len());

    let mut success_count = 0usize;
    let mut error_count = 0usize;

    for object in &objects {
        match publisher.publish(&object.name, object.metadata.as_ref()).await {
            Ok(()) => {
                success_count += 1;
                println!("{}/{} - {} published", success_count, objects.len(), object.name);
            }
            Err(e) => {
                error_count += 1;
                eprintln!("Failed ({}): {}", object.name, e);
            }
        }
    }

    println!("\nSummary:");
    println!("  published: {}", success_count);
    println!("  failed:    {}", error_count);
    println!("  total:     {}", objects.len());

    Ok(())
}
