use actix_web::{web, App, HttpServer};
use fcm_shared::FcmClient;
use gcp_auth_shared::ServiceAccountKey;
use notification_service::{
    handlers::push::register_routes as register_push, Config, PushDispatcher,
};
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

    tracing::info!("Starting notification service");

    let config = Config::from_env()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Bad configuration: {e}")))?;

    // Credentials are loaded once at startup and injected into the client.
    let credentials = ServiceAccountKey::load(config.gcp.credentials_path.as_deref())
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Credential load failed: {e}")))?;
    tracing::info!(project_id = %credentials.project_id, "Service account ready");

    let dispatcher = Arc::new(PushDispatcher::new(Arc::new(FcmClient::new(credentials))));

    let addr = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(dispatcher.clone()))
            .wrap(TracingLogger::default())
            .route("/health", web::get().to(|| async { "OK" }))
            .configure(register_push)
    })
    .bind(&addr)?
    .run()
    .await
}
