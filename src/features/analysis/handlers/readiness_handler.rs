use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::features::analysis::dtos::ReadinessDto;
use crate::features::analysis::services::AnalysisService;
use crate::shared::types::ApiResponse;

/// Readiness check that also probes the analysis backend
///
/// `/health` stays a pure liveness check; this route answers 503 when the
/// backend does not respond.
#[utoipa::path(
    get,
    path = "/health/ready",
    responses(
        (status = 200, description = "Backend reachable", body = ApiResponse<ReadinessDto>),
        (status = 503, description = "Backend unreachable", body = ApiResponse<ReadinessDto>)
    ),
    tag = "health"
)]
pub async fn readiness_check(
    State(service): State<Arc<AnalysisService>>,
) -> (StatusCode, Json<ApiResponse<ReadinessDto>>) {
    match service.check_backend().await {
        Ok(data) => (
            StatusCode::OK,
            Json(ApiResponse::success(Some(ReadinessDto::ready(data)), None, None)),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse::success(
                Some(ReadinessDto::unavailable()),
                Some(e.to_string()),
                None,
            )),
        ),
    }
}
