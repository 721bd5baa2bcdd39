use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::regions::handlers;
use crate::features::regions::services::RegionResolver;

/// Create routes for the regions feature
pub fn routes(resolver: Arc<RegionResolver>) -> Router {
    Router::new()
        .route("/api/regions/provinces", get(handlers::list_provinces))
        .route(
            "/api/regions/provinces/{code}/sub-districts",
            get(handlers::list_sub_districts),
        )
        .route(
            "/api/regions/sub-districts/{code}/neighborhoods",
            get(handlers::list_neighborhoods),
        )
        .route("/api/regions/resolve", post(handlers::resolve_region))
        .with_state(resolver)
}
