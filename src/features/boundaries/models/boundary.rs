use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::features::regions::models::RegionLevel;

/// GeoJSON geometry kinds a region boundary can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum GeometryType {
    Polygon,
    MultiPolygon,
}

/// Centroid of a boundary (WGS84)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Centroid {
    pub lng: f64,
    pub lat: f64,
}

/// Region outline and centroid as returned by the remote boundary function
///
/// `coordinates` is kept as opaque GeoJSON; nothing here inspects the
/// geometry beyond checking that it is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryPayload {
    #[serde(rename = "type")]
    pub geometry_type: GeometryType,
    pub coordinates: Value,
    pub centroid: Centroid,
}

impl BoundaryPayload {
    /// Validate a raw upstream object
    ///
    /// Requires `type` (Polygon or MultiPolygon), a non-null `coordinates`
    /// array and a `centroid` object with finite numeric `lng`/`lat`. The
    /// error string describes the first problem found.
    pub fn from_upstream(value: Value) -> Result<Self, String> {
        let mut object = match value {
            Value::Object(object) => object,
            other => return Err(format!("expected a JSON object, got {}", value_kind(&other))),
        };

        let geometry_type = match object.get("type").and_then(Value::as_str) {
            Some("Polygon") => GeometryType::Polygon,
            Some("MultiPolygon") => GeometryType::MultiPolygon,
            Some(other) => return Err(format!("unsupported geometry type '{}'", other)),
            None => return Err("missing geometry type".to_string()),
        };

        let coordinates = match object.remove("coordinates") {
            Some(coords @ Value::Array(_)) => coords,
            Some(other) => {
                return Err(format!(
                    "coordinates must be an array, got {}",
                    value_kind(&other)
                ))
            }
            None => return Err("missing coordinates".to_string()),
        };

        let centroid = object
            .get("centroid")
            .ok_or_else(|| "missing centroid".to_string())
            .and_then(parse_centroid)?;

        Ok(Self {
            geometry_type,
            coordinates,
            centroid,
        })
    }
}

fn parse_centroid(value: &Value) -> Result<Centroid, String> {
    let coordinate = |axis: &str| {
        value
            .get(axis)
            .and_then(Value::as_f64)
            .filter(|v| v.is_finite())
            .ok_or_else(|| format!("centroid is missing a numeric '{}'", axis))
    };

    Ok(Centroid {
        lng: coordinate("lng")?,
        lat: coordinate("lat")?,
    })
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Cache identity of a boundary: `"{level}:{code}"`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn new(level: RegionLevel, code: &str) -> Self {
        Self(format!("{}:{}", level.as_str(), code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
