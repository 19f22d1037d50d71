use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, http::StatusCode, routing::get, Router};

use crate::core::config::AppConfig;
use crate::core::error::AppError;
use crate::features::schools::{routes as schools_routes, SchoolService};

/// Simple health check endpoint
async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Unmatched routes, including a known path with an unrouted method, answer
/// with the standard error envelope
async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

/// Build the API router: resource routes, health check, fallback and body limit.
///
/// Cross-cutting layers (CORS, tracing, request ids) and Swagger UI are added
/// by the binary on top of this.
pub fn api_router(school_service: Arc<SchoolService>, app: &AppConfig) -> Router {
    Router::new()
        .merge(schools_routes::routes(school_service))
        .route("/health", get(health_check))
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .layer(DefaultBodyLimit::max(app.max_request_body_size))
}
