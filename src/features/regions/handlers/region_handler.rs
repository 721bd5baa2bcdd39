use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::regions::dtos::{RegionResponseDto, RegionSearchQuery, ResolvedRegionDto};
use crate::features::regions::models::{RegionLevel, RegionRequest};
use crate::features::regions::services::RegionResolver;
use crate::shared::types::{ApiResponse, Meta};

/// List response with `meta.total` set to the number of entries returned
fn list_response(dtos: Vec<RegionResponseDto>) -> Json<ApiResponse<Vec<RegionResponseDto>>> {
    let meta = Meta {
        total: dtos.len() as i64,
    };
    Json(ApiResponse::success(Some(dtos), None, Some(meta)))
}

/// List children of `parent_code`, or 404 when the parent is unknown
fn list_children(
    resolver: &RegionResolver,
    parent_level: RegionLevel,
    level: RegionLevel,
    parent_code: &str,
    query: &RegionSearchQuery,
) -> Result<Vec<RegionResponseDto>> {
    let catalog = resolver.catalog();
    catalog.get(parent_level, parent_code).ok_or_else(|| {
        AppError::NotFound(format!("{} '{}' not found", parent_level, parent_code))
    })?;

    Ok(catalog
        .children(level, parent_code)
        .into_iter()
        .filter(|entry| query.matches(entry))
        .map(Into::into)
        .collect())
}

/// List all provinces
#[utoipa::path(
    get,
    path = "/api/regions/provinces",
    params(RegionSearchQuery),
    responses(
        (status = 200, description = "List of provinces", body = ApiResponse<Vec<RegionResponseDto>>)
    ),
    tag = "regions"
)]
pub async fn list_provinces(
    State(resolver): State<Arc<RegionResolver>>,
    Query(query): Query<RegionSearchQuery>,
) -> Result<Json<ApiResponse<Vec<RegionResponseDto>>>> {
    let dtos: Vec<RegionResponseDto> = resolver
        .catalog()
        .entries(RegionLevel::Province)
        .iter()
        .filter(|entry| query.matches(entry))
        .map(Into::into)
        .collect();
    Ok(list_response(dtos))
}

/// List sub-districts in a province
#[utoipa::path(
    get,
    path = "/api/regions/provinces/{code}/sub-districts",
    params(
        ("code" = String, Path, description = "Province code"),
        RegionSearchQuery
    ),
    responses(
        (status = 200, description = "Sub-districts of the province", body = ApiResponse<Vec<RegionResponseDto>>),
        (status = 404, description = "Province not found")
    ),
    tag = "regions"
)]
pub async fn list_sub_districts(
    State(resolver): State<Arc<RegionResolver>>,
    Path(code): Path<String>,
    Query(query): Query<RegionSearchQuery>,
) -> Result<Json<ApiResponse<Vec<RegionResponseDto>>>> {
    let dtos = list_children(
        &resolver,
        RegionLevel::Province,
        RegionLevel::SubDistrict,
        &code,
        &query,
    )?;
    Ok(list_response(dtos))
}

/// List neighborhoods in a sub-district
#[utoipa::path(
    get,
    path = "/api/regions/sub-districts/{code}/neighborhoods",
    params(
        ("code" = String, Path, description = "Sub-district code"),
        RegionSearchQuery
    ),
    responses(
        (status = 200, description = "Neighborhoods of the sub-district", body = ApiResponse<Vec<RegionResponseDto>>),
        (status = 404, description = "Sub-district not found")
    ),
    tag = "regions"
)]
pub async fn list_neighborhoods(
    State(resolver): State<Arc<RegionResolver>>,
    Path(code): Path<String>,
    Query(query): Query<RegionSearchQuery>,
) -> Result<Json<ApiResponse<Vec<RegionResponseDto>>>> {
    let dtos = list_children(
        &resolver,
        RegionLevel::SubDistrict,
        RegionLevel::Neighborhood,
        &code,
        &query,
    )?;
    Ok(list_response(dtos))
}

/// Resolve region names to a region code
#[utoipa::path(
    post,
    path = "/api/regions/resolve",
    request_body = RegionRequest,
    responses(
        (status = 200, description = "Region resolved", body = ApiResponse<ResolvedRegionDto>),
        (status = 400, description = "Missing name or region not found")
    ),
    tag = "regions"
)]
pub async fn resolve_region(
    State(resolver): State<Arc<RegionResolver>>,
    AppJson(request): AppJson<RegionRequest>,
) -> Result<Json<ApiResponse<ResolvedRegionDto>>> {
    let code = resolver.resolve(&request)?;
    Ok(Json(ApiResponse::success(
        Some(ResolvedRegionDto::new(request.level, code)),
        None,
        None,
    )))
}
