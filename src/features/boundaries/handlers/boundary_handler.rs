use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::boundaries::dtos::BoundaryDto;
use crate::features::boundaries::services::BoundaryLookupService;
use crate::features::regions::models::RegionRequest;
use crate::shared::types::ApiResponse;

/// Get the boundary of a region by name
///
/// A region without published boundary data answers 200 with `data: null`.
#[utoipa::path(
    post,
    path = "/api/boundaries",
    request_body = RegionRequest,
    responses(
        (status = 200, description = "Region boundary, or null when unavailable", body = ApiResponse<BoundaryDto>),
        (status = 400, description = "Missing name or region not found")
    ),
    tag = "boundaries"
)]
pub async fn get_boundary(
    State(service): State<Arc<BoundaryLookupService>>,
    AppJson(request): AppJson<RegionRequest>,
) -> Result<Json<ApiResponse<BoundaryDto>>> {
    let boundary = service.resolve_and_fetch_boundary(&request).await?;

    Ok(Json(match boundary {
        Some(payload) => ApiResponse::success(Some(payload.as_ref().into()), None, None),
        None => ApiResponse::success(None, Some("No boundary available".to_string()), None),
    }))
}
