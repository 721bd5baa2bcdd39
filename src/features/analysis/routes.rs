use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::analysis::handlers;
use crate::features::analysis::services::AnalysisService;

/// Create routes for the analysis feature
pub fn routes(service: Arc<AnalysisService>) -> Router {
    Router::new()
        .route("/api/analysis/shape", post(handlers::analyze_shape))
        .route("/api/analysis/region", post(handlers::analyze_region))
        .route("/health/ready", get(handlers::readiness_check))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::CacheConfig;
    use crate::features::boundaries::services::{BoundaryCache, BoundaryLookupService};
    use crate::features::regions::services::RegionResolver;
    use crate::shared::test_helpers::{
        census_row, sample_catalog, StaticBoundaryFetcher, StaticPopulationAnalyzer,
    };
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server(analyzer: StaticPopulationAnalyzer) -> TestServer {
        let resolver = Arc::new(RegionResolver::new(Arc::new(sample_catalog())));
        let lookup = Arc::new(BoundaryLookupService::new(
            resolver,
            Arc::new(BoundaryCache::new(&CacheConfig::default())),
            Arc::new(StaticBoundaryFetcher::with_all_codes()),
        ));
        let service = Arc::new(AnalysisService::new(Arc::new(analyzer), lookup));
        TestServer::new(routes(service)).unwrap()
    }

    fn circle(radius: f64) -> Value {
        json!({
            "type": "circle",
            "data": {"center_lng": 127.1, "center_lat": 37.4, "radius": radius}
        })
    }

    #[tokio::test]
    async fn test_analyze_shape() {
        let analyzer = StaticPopulationAnalyzer::new().with_shape_response(json!({
            "total_population": 800,
            "total_households": 310,
            "age_distribution": {"40대": 120},
            "analysis_area_sqm": 3141.59,
            "shape_type": "circle"
        }));

        let response = server(analyzer)
            .post("/api/analysis/shape")
            .json(&circle(1000.0))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["data"]["total_population"], 800);
        assert_eq!(body["data"]["age_distribution"]["40대"], 120);
        assert!(body["data"].get("boundary").is_none());
    }

    #[tokio::test]
    async fn test_analyze_shape_invalid_radius() {
        let response = server(StaticPopulationAnalyzer::new())
            .post("/api/analysis/shape")
            .json(&circle(60_000.0))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_analyze_shape_backend_down() {
        let response = server(StaticPopulationAnalyzer::unavailable())
            .post("/api/analysis/shape")
            .json(&circle(1000.0))
            .await;
        response.assert_status(StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_readiness_reports_backend_state() {
        let response = server(StaticPopulationAnalyzer::new()).get("/health/ready").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["status"], "ready");
        assert_eq!(body["data"]["database"], "success");

        let response = server(StaticPopulationAnalyzer::unavailable())
            .get("/health/ready")
            .await;
        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = response.json();
        assert_eq!(body["data"]["database"], "error");
    }

    #[tokio::test]
    async fn test_analyze_region() {
        let analyzer =
            StaticPopulationAnalyzer::new().with_census_row("101001", census_row("101001"));

        let response = server(analyzer)
            .post("/api/analysis/region")
            .json(&json!({
                "sido": "P1", "sigungu": "S1", "dong": "Central", "level": "dong"
            }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["data"]["shape_type"], "region");
        assert_eq!(body["data"]["total_households"], 5100);
        assert_eq!(body["data"]["boundary"]["type"], "Polygon");
    }

    #[tokio::test]
    async fn test_analyze_region_without_census() {
        let response = server(StaticPopulationAnalyzer::new())
            .post("/api/analysis/region")
            .json(&json!({"province": "P2", "level": "province"}))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
    }
}
