use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::features::boundaries::models::{BoundaryPayload, Centroid, GeometryType};

/// Region boundary (WGS84 GeoJSON geometry plus centroid)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BoundaryDto {
    #[serde(rename = "type")]
    pub geometry_type: GeometryType,
    /// GeoJSON coordinate array
    #[schema(value_type = Object)]
    pub coordinates: Value,
    pub centroid: Centroid,
}

impl From<&BoundaryPayload> for BoundaryDto {
    fn from(payload: &BoundaryPayload) -> Self {
        Self {
            geometry_type: payload.geometry_type,
            coordinates: payload.coordinates.clone(),
            centroid: payload.centroid,
        }
    }
}
