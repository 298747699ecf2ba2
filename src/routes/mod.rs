use actix_web::web;

use crate::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Health check
        .route("/health", web::get().to(health_check))
        // Paged people with self/first/last/prev/next links
        .route("/your", web::get().to(handlers::list_people))
        // Same page computation, paged-list response convention
        .route("/your2", web::get().to(handlers::list_people_paged_list));
}

/// Service health check
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running")
    )
)]
pub async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(serde_json::json!({
        "status": "OK",
        "message": "Server is running"
    }))
}
