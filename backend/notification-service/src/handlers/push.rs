/// Push dispatch handlers
use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::error::Result;
use crate::models::{SendPushBatchRequest, SendPushRequest};
use crate::services::PushDispatcher;

/// Send a push notification to a single device
///
/// POST /api/v1/push/send
pub async fn send_push(
    dispatcher: web::Data<Arc<PushDispatcher>>,
    req: web::Json<SendPushRequest>,
) -> Result<HttpResponse> {
    let response = dispatcher.send_single(&req).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Send a push notification to a list of devices
///
/// POST /api/v1/push/send-batch
pub async fn send_push_batch(
    dispatcher: web::Data<Arc<PushDispatcher>>,
    req: web::Json<SendPushBatchRequest>,
) -> Result<HttpResponse> {
    let response = dispatcher.send_batch(&req).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Register routes
pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/push")
            .route("/send", web::post().to(send_push))
            .route("/send-batch", web::post().to(send_push_batch)),
    );
}
