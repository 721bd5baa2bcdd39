use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::features::boundaries::models::BoundaryPayload;

/// Age band columns of the census table: (label, alternate spelling)
const AGE_BANDS: [(&str, &str); 11] = [
    ("10세 미만", "10세미만"),
    ("10대", "10대"),
    ("20대", "20대"),
    ("30대", "30대"),
    ("40대", "40대"),
    ("50대", "50대"),
    ("60대", "60대"),
    ("70대", "70대"),
    ("80대", "80대"),
    ("90대", "90대"),
    ("100세 이상", "100세이상"),
];

/// Population figures for a drawn shape or an administrative region
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationResult {
    pub total_population: i64,
    pub total_households: i64,
    pub age_distribution: BTreeMap<String, i64>,
    pub analysis_area_sqm: f64,
    pub shape_type: String,
    pub boundary: Option<Arc<BoundaryPayload>>,
}

impl PopulationResult {
    /// Map the object returned by the shape analysis function
    ///
    /// An object carrying `"error": true` is reported as `Err(message)`.
    pub fn from_shape_response(value: &Value, shape_type: &str) -> Result<Self, String> {
        let object = value
            .as_object()
            .ok_or_else(|| format!("unexpected analysis response: {}", value))?;

        if object.get("error").and_then(Value::as_bool).unwrap_or(false) {
            return Err(object
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Unknown analysis error")
                .to_string());
        }

        if !object.contains_key("total_population") {
            return Err(format!("analysis response lacks total_population: {}", value));
        }

        let age_distribution = object
            .get("age_distribution")
            .and_then(Value::as_object)
            .map(|bands| {
                bands
                    .iter()
                    .map(|(label, count)| (label.clone(), as_count(count)))
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            total_population: count_field(object, &["total_population"]),
            total_households: count_field(object, &["total_households"]),
            age_distribution,
            analysis_area_sqm: object
                .get("analysis_area_sqm")
                .and_then(Value::as_f64)
                .unwrap_or(0.0),
            shape_type: object
                .get("shape_type")
                .and_then(Value::as_str)
                .unwrap_or(shape_type)
                .to_string(),
            boundary: None,
        })
    }

    /// Map a `census_region` row; area is not known for administrative regions
    pub fn from_census_row(row: &Value, boundary: Option<Arc<BoundaryPayload>>) -> Self {
        let empty = Map::new();
        let object = row.as_object().unwrap_or(&empty);

        let age_distribution = AGE_BANDS
            .iter()
            .map(|&(label, alternate)| {
                (label.to_string(), count_field(object, &[label, alternate]))
            })
            .collect();

        Self {
            total_population: count_field(object, &["pop", "총인구수"]),
            total_households: count_field(object, &["households", "총가구수"]),
            age_distribution,
            analysis_area_sqm: 0.0,
            shape_type: "region".to_string(),
            boundary,
        }
    }
}

/// First present key wins; missing or unreadable values count as 0
fn count_field(object: &Map<String, Value>, keys: &[&str]) -> i64 {
    keys.iter()
        .find_map(|key| object.get(*key))
        .map(as_count)
        .unwrap_or(0)
}

/// Census columns arrive as integers, floats or numeric strings
fn as_count(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .ok()
            .or_else(|| s.trim().parse::<f64>().ok().map(|f| f as i64))
            .unwrap_or(0),
        _ => 0,
    }
}
