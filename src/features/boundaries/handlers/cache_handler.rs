use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::boundaries::dtos::{CacheStatsDto, ClearCacheResponseDto};
use crate::features::boundaries::services::BoundaryLookupService;
use crate::shared::types::ApiResponse;

/// Boundary cache statistics
#[utoipa::path(
    get,
    path = "/api/cache/stats",
    responses(
        (status = 200, description = "Cache statistics", body = ApiResponse<CacheStatsDto>)
    ),
    tag = "cache"
)]
pub async fn get_cache_stats(
    State(service): State<Arc<BoundaryLookupService>>,
) -> Result<Json<ApiResponse<CacheStatsDto>>> {
    let stats = service.cache().stats().await;
    Ok(Json(ApiResponse::success(Some(stats.into()), None, None)))
}

/// Remove every cached boundary
#[utoipa::path(
    delete,
    path = "/api/cache",
    responses(
        (status = 200, description = "Cache cleared", body = ApiResponse<ClearCacheResponseDto>)
    ),
    tag = "cache"
)]
pub async fn clear_cache(
    State(service): State<Arc<BoundaryLookupService>>,
) -> Result<Json<ApiResponse<ClearCacheResponseDto>>> {
    let cleared_count = service.cache().clear().await;
    Ok(Json(ApiResponse::success(
        Some(ClearCacheResponseDto { cleared_count }),
        Some(format!("Cleared {} cached boundaries", cleared_count)),
        None,
    )))
}

/// Reset cache counters
#[utoipa::path(
    delete,
    path = "/api/cache/stats",
    responses(
        (status = 200, description = "Statistics reset", body = ApiResponse<CacheStatsDto>)
    ),
    tag = "cache"
)]
pub async fn reset_cache_stats(
    State(service): State<Arc<BoundaryLookupService>>,
) -> Result<Json<ApiResponse<CacheStatsDto>>> {
    service.cache().reset_stats().await;
    let stats = service.cache().stats().await;
    Ok(Json(ApiResponse::success(
        Some(stats.into()),
        Some("Cache statistics reset".to_string()),
        None,
    )))
}
