use std::sync::Arc;

use serde_json::{json, Value};
use thiserror::Error;

use crate::features::analysis::models::PopulationResult;
use crate::features::analysis::services::PopulationAnalyzer;
use crate::features::boundaries::services::BoundaryLookupService;
use crate::features::regions::models::RegionRequest;
use crate::features::regions::services::ResolveError;
use crate::modules::supabase::UpstreamError;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("No census data for region {0}")]
    CensusNotFound(String),

    /// The analysis function ran but refused the input
    #[error("Analysis failed: {0}")]
    Rejected(String),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

/// A validated shape drawn on the map
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingShape {
    Circle {
        center_lng: f64,
        center_lat: f64,
        radius: f64,
        segments: u32,
    },
    Polygon {
        coordinates: Vec<[f64; 2]>,
    },
}

impl DrawingShape {
    pub fn shape_type(&self) -> &'static str {
        match self {
            DrawingShape::Circle { .. } => "circle",
            DrawingShape::Polygon { .. } => "polygon",
        }
    }

    /// Argument object expected by the analysis function
    fn to_shape_data(&self) -> Value {
        match self {
            DrawingShape::Circle {
                center_lng,
                center_lat,
                radius,
                segments,
            } => json!({
                "center_lng": center_lng,
                "center_lat": center_lat,
                "radius": radius,
                "segments": segments,
            }),
            DrawingShape::Polygon { coordinates } => json!({ "coordinates": coordinates }),
        }
    }
}

/// Population analysis over drawn shapes and administrative regions
pub struct AnalysisService {
    analyzer: Arc<dyn PopulationAnalyzer>,
    lookup: Arc<BoundaryLookupService>,
}

impl AnalysisService {
    pub fn new(analyzer: Arc<dyn PopulationAnalyzer>, lookup: Arc<BoundaryLookupService>) -> Self {
        Self { analyzer, lookup }
    }

    pub async fn analyze_shape(&self, shape: &DrawingShape) -> Result<PopulationResult, AnalysisError> {
        let shape_type = shape.shape_type();
        let shape_data = shape.to_shape_data();
        tracing::info!("Analyzing {} shape: {}", shape_type, shape_data);

        let response = self.analyzer.analyze_shape(shape_type, shape_data).await?;

        PopulationResult::from_shape_response(&response, shape_type).map_err(|message| {
            tracing::warn!("Shape analysis rejected: {}", message);
            AnalysisError::Rejected(message)
        })
    }

    /// Probe the analysis backend, returning whatever the check call answered
    pub async fn check_backend(&self) -> Result<Value, AnalysisError> {
        self.analyzer.check_connection().await.map_err(|e| {
            tracing::warn!("Analysis backend check failed: {}", e);
            AnalysisError::Upstream(e)
        })
    }

    /// Census figures for a region, with its boundary when one is available
    pub async fn analyze_region(
        &self,
        request: &RegionRequest,
    ) -> Result<PopulationResult, AnalysisError> {
        let code = self.lookup.resolver().resolve(request)?;
        tracing::info!("Analyzing region {} ({})", code, request.level);

        let rows = self.analyzer.census_rows(&code).await?;
        let row = rows
            .into_iter()
            .next()
            .ok_or_else(|| AnalysisError::CensusNotFound(code.clone()))?;

        let boundary = self.lookup.boundary_for_code(request.level, &code).await;
        if boundary.is_none() {
            tracing::info!("Region {} analyzed without boundary", code);
        }

        Ok(PopulationResult::from_census_row(&row, boundary))
    }
}
