/// Product handlers
use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::error::Result;
use crate::models::NewProductRequest;
use crate::services::ProductService;

/// Create a product, optionally uploading its image
///
/// POST /api/v1/products
pub async fn create_product(
    service: web::Data<Arc<ProductService>>,
    req: web::Json<NewProductRequest>,
) -> Result<HttpResponse> {
    let response = service.create_product(&req).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Register routes
pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1/products").route("", web::post().to(create_product)));
}
