use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::features::analysis::models::PopulationResult;
use crate::features::analysis::services::DrawingShape;
use crate::features::boundaries::dtos::BoundaryDto;
use crate::shared::constants::{
    DEFAULT_CIRCLE_SEGMENTS, MAX_CIRCLE_RADIUS_METERS, MAX_CIRCLE_SEGMENTS, MIN_CIRCLE_SEGMENTS,
};

fn default_segments() -> u32 {
    DEFAULT_CIRCLE_SEGMENTS
}

/// Circle drawn on the map; radius in metres
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CircleDataDto {
    #[validate(range(min = -180.0, max = 180.0, message = "center_lng must be between -180 and 180"))]
    #[schema(example = 127.1086)]
    pub center_lng: f64,

    #[validate(range(min = -90.0, max = 90.0, message = "center_lat must be between -90 and 90"))]
    #[schema(example = 37.4012)]
    pub center_lat: f64,

    #[validate(range(
        exclusive_min = 0.0,
        max = MAX_CIRCLE_RADIUS_METERS,
        message = "Radius must be greater than 0 and at most 50km"
    ))]
    #[schema(example = 1000.0)]
    pub radius: f64,

    #[serde(default = "default_segments")]
    #[validate(range(
        min = MIN_CIRCLE_SEGMENTS,
        max = MAX_CIRCLE_SEGMENTS,
        message = "segments must be between 4 and 360"
    ))]
    pub segments: u32,
}

/// Polygon drawn on the map as `[lng, lat]` vertices
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PolygonDataDto {
    #[validate(length(min = 3, message = "A polygon needs at least 3 coordinates"))]
    #[schema(value_type = Vec<Vec<f64>>)]
    pub coordinates: Vec<[f64; 2]>,
}

/// Request DTO for shape analysis: `{"type": "circle" | "polygon", "data": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum DrawingObjectDto {
    Circle(CircleDataDto),
    Polygon(PolygonDataDto),
}

impl Validate for DrawingObjectDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            DrawingObjectDto::Circle(data) => data.validate(),
            DrawingObjectDto::Polygon(data) => data.validate(),
        }
    }
}

impl From<DrawingObjectDto> for DrawingShape {
    fn from(dto: DrawingObjectDto) -> Self {
        match dto {
            DrawingObjectDto::Circle(data) => DrawingShape::Circle {
                center_lng: data.center_lng,
                center_lat: data.center_lat,
                radius: data.radius,
                segments: data.segments,
            },
            DrawingObjectDto::Polygon(data) => DrawingShape::Polygon {
                coordinates: data.coordinates,
            },
        }
    }
}

/// Response DTO for population analysis
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PopulationResultDto {
    pub total_population: i64,
    pub total_households: i64,
    /// Population per age band, keyed by band label
    pub age_distribution: BTreeMap<String, i64>,
    /// Analysed area in square metres; 0 for administrative regions
    pub analysis_area_sqm: f64,
    #[schema(example = "circle")]
    pub shape_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary: Option<BoundaryDto>,
}

impl From<PopulationResult> for PopulationResultDto {
    fn from(result: PopulationResult) -> Self {
        Self {
            total_population: result.total_population,
            total_households: result.total_households,
            age_distribution: result.age_distribution,
            analysis_area_sqm: result.analysis_area_sqm,
            shape_type: result.shape_type,
            boundary: result.boundary.as_deref().map(Into::into),
        }
    }
}
