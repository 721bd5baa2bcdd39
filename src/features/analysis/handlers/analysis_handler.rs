use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::analysis::dtos::{DrawingObjectDto, PopulationResultDto};
use crate::features::analysis::services::AnalysisService;
use crate::features::regions::models::RegionRequest;
use crate::shared::types::ApiResponse;

/// Population inside a drawn circle or polygon
#[utoipa::path(
    post,
    path = "/api/analysis/shape",
    request_body = DrawingObjectDto,
    responses(
        (status = 200, description = "Analysis result", body = ApiResponse<PopulationResultDto>),
        (status = 400, description = "Invalid shape or analysis rejected"),
        (status = 502, description = "Analysis backend unavailable")
    ),
    tag = "analysis"
)]
pub async fn analyze_shape(
    State(service): State<Arc<AnalysisService>>,
    AppJson(dto): AppJson<DrawingObjectDto>,
) -> Result<Json<ApiResponse<PopulationResultDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let result = service.analyze_shape(&dto.into()).await?;
    Ok(Json(ApiResponse::success(Some(result.into()), None, None)))
}

/// Census population of an administrative region, with its boundary
#[utoipa::path(
    post,
    path = "/api/analysis/region",
    request_body = RegionRequest,
    responses(
        (status = 200, description = "Analysis result", body = ApiResponse<PopulationResultDto>),
        (status = 400, description = "Missing name or region not found"),
        (status = 404, description = "No census data for the region"),
        (status = 502, description = "Census backend unavailable")
    ),
    tag = "analysis"
)]
pub async fn analyze_region(
    State(service): State<Arc<AnalysisService>>,
    AppJson(request): AppJson<RegionRequest>,
) -> Result<Json<ApiResponse<PopulationResultDto>>> {
    let result = service.analyze_region(&request).await?;
    Ok(Json(ApiResponse::success(Some(result.into()), None, None)))
}
