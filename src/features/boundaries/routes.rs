use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::features::boundaries::handlers;
use crate::features::boundaries::services::BoundaryLookupService;

/// Create routes for the boundaries feature
pub fn routes(service: Arc<BoundaryLookupService>) -> Router {
    Router::new()
        .route("/api/boundaries", post(handlers::get_boundary))
        .route("/api/cache", delete(handlers::clear_cache))
        .route(
            "/api/cache/stats",
            get(handlers::get_cache_stats).delete(handlers::reset_cache_stats),
        )
        .with_state(service)
}
