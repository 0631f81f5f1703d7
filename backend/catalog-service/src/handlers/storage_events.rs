/// Storage finalize-event handler
///
/// Publishing visibility is best-effort: this handler answers 200 no matter
/// what so the event source never retries.
use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::models::{PublishEventResponse, StorageObjectEvent};
use crate::services::ImagePublisher;

/// Handle one finalized storage object
///
/// POST /internal/storage/events
pub async fn object_finalized(
    publisher: web::Data<Arc<ImagePublisher>>,
    event: web::Json<StorageObjectEvent>,
) -> HttpResponse {
    let object_name = match event.name.as_deref() {
        Some(name) if ImagePublisher::is_product_image(name) => name,
        Some(name) => {
            tracing::debug!(object = %name, "Object outside the product media prefix, skipping");
            return HttpResponse::Ok().json(PublishEventResponse {
                success: true,
                published: false,
            });
        }
        None => {
            tracing::debug!("Finalize event without an object name, skipping");
            return HttpResponse::Ok().json(PublishEventResponse {
                success: true,
                published: false,
            });
        }
    };

    match publisher.publish(object_name, event.metadata.as_ref()).await {
        Ok(()) => {
            tracing::info!(object = %object_name, "Object made public");
            HttpResponse::Ok().json(PublishEventResponse {
                success: true,
                published: true,
            })
        }
        Err(e) => {
            tracing::warn!(object = %object_name, "Publish failed (best-effort): {}", e);
            HttpResponse::Ok().json(PublishEventResponse {
                success: true,
                published: false,
            })
        }
    }
}

/// Register routes
pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/internal/storage").route("/events", web::post().to(object_finalized)),
    );
}
