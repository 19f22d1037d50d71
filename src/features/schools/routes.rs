use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::schools::handlers;
use crate::features::schools::services::SchoolService;

/// Create routes for the schools feature
pub fn routes(service: Arc<SchoolService>) -> Router {
    Router::new()
        .route(
            "/api/v1/school",
            get(handlers::list_schools).post(handlers::create_school),
        )
        .route(
            "/api/v1/school/{id}",
            get(handlers::get_school)
                .put(handlers::update_school)
                .delete(handlers::delete_school),
        )
        .with_state(service)
}
