use actix_web::{web, App, HttpServer};
use catalog_service::handlers::{products, storage_events};
use catalog_service::{Config, ImagePublisher, ProductService};
use firestore_shared::FirestoreClient;
use gcp_auth_shared::{ServiceAccountKey, TokenProvider};
use gcs_shared::StorageClient;
use std::io;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting catalog service");

    let config = Config::from_env()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Bad configuration: {e}")))?;

    // Credentials are loaded once at startup; all clients share one token
    // provider so they also share its cache.
    let credentials = ServiceAccountKey::load(config.gcp.credentials_path.as_deref())
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Credential load failed: {e}")))?;
    tracing::info!(project_id = %credentials.project_id, bucket = %config.gcp.bucket, "Service account ready");

    let provider = TokenProvider::new(credentials);
    let storage = Arc::new(StorageClient::with_provider(
        config.gcp.bucket.clone(),
        provider.clone(),
    ));
    let firestore = Arc::new(FirestoreClient::with_provider(provider));

    let product_service = Arc::new(ProductService::new(storage.clone(), firestore));
    let publisher = Arc::new(ImagePublisher::new(storage));

    let addr = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(product_service.clone()))
            .app_data(web::Data::new(publisher.clone()))
            .wrap(TracingLogger::default())
            .route("/health", web::get().to(|| async { "OK" }))
            .configure(products::register_routes)
            .configure(storage_events::register_routes)
    })
    .bind(&addr)?
    .run()
    .await
}
