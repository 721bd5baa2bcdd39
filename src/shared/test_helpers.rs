//! Fixtures and in-memory fakes shared by unit and handler tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::features::analysis::services::PopulationAnalyzer;
use crate::features::boundaries::models::BoundaryPayload;
use crate::features::boundaries::services::BoundaryFetcher;
use crate::features::regions::models::{RegionCatalog, RegionCatalogEntry, RegionLevel};
use crate::modules::supabase::UpstreamError;

/// Two provinces that both contain a sub-district named "S1", each with a
/// neighborhood named "Central".
///
/// ```text
/// P1 (10)            P2 (20)
/// ├── S1 (1010)      └── S1 (2010)
/// │   ├── Central (101001)  └── Central (201001)
/// │   └── East    (101002)
/// └── S2 (1020)
/// ```
pub fn sample_catalog() -> RegionCatalog {
    RegionCatalog::new(
        vec![
            RegionCatalogEntry::new("10", "P1", None),
            RegionCatalogEntry::new("20", "P2", None),
        ],
        vec![
            RegionCatalogEntry::new("1010", "S1", Some("10")),
            RegionCatalogEntry::new("1020", "S2", Some("10")),
            RegionCatalogEntry::new("2010", "S1", Some("20")),
        ],
        vec![
            RegionCatalogEntry::new("101001", "Central", Some("1010")),
            RegionCatalogEntry::new("101002", "East", Some("1010")),
            RegionCatalogEntry::new("201001", "Central", Some("2010")),
        ],
    )
    .expect("sample catalog is valid")
}

/// Upstream-shaped Polygon boundary with a single ring of `points` vertices
pub fn boundary_json(points: usize) -> Value {
    let ring: Vec<Value> = (0..points)
        .map(|i| json!([127.0 + i as f64 * 0.001, 37.0]))
        .collect();
    json!({
        "type": "Polygon",
        "coordinates": [ring],
        "centroid": {"lng": 127.0, "lat": 37.0}
    })
}

pub fn sample_boundary(points: usize) -> BoundaryPayload {
    BoundaryPayload::from_upstream(boundary_json(points)).expect("fixture boundary is valid")
}

/// In-memory boundary source that records every code it was asked for
pub struct StaticBoundaryFetcher {
    boundaries: HashMap<String, Value>,
    any_code: bool,
    calls: AtomicUsize,
    requested: Mutex<Vec<String>>,
}

impl StaticBoundaryFetcher {
    /// Returns a valid boundary for every code
    pub fn with_all_codes() -> Self {
        Self {
            any_code: true,
            ..Self::empty()
        }
    }

    /// Returns no boundary unless one is registered with `with_boundary`
    pub fn empty() -> Self {
        Self {
            boundaries: HashMap::new(),
            any_code: false,
            calls: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn with_boundary(mut self, code: &str, boundary: Value) -> Self {
        self.boundaries.insert(code.to_string(), boundary);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl BoundaryFetcher for StaticBoundaryFetcher {
    async fn fetch(&self, code: &str, _level: RegionLevel) -> Result<Option<Value>, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(code.to_string());

        if let Some(boundary) = self.boundaries.get(code) {
            return Ok(Some(boundary.clone()));
        }
        Ok(self.any_code.then(|| boundary_json(4)))
    }
}

/// Boundary source whose every call fails
pub struct FailingBoundaryFetcher;

#[async_trait]
impl BoundaryFetcher for FailingBoundaryFetcher {
    async fn fetch(&self, _code: &str, _level: RegionLevel) -> Result<Option<Value>, UpstreamError> {
        Err(unavailable())
    }
}

/// Population backend with canned responses; `None` simulates an outage
pub struct StaticPopulationAnalyzer {
    pub shape_response: Option<Value>,
    pub census: Option<HashMap<String, Value>>,
}

impl StaticPopulationAnalyzer {
    pub fn new() -> Self {
        Self {
            shape_response: None,
            census: Some(HashMap::new()),
        }
    }

    pub fn with_shape_response(mut self, response: Value) -> Self {
        self.shape_response = Some(response);
        self
    }

    pub fn with_census_row(mut self, code: &str, row: Value) -> Self {
        if let Some(census) = self.census.as_mut() {
            census.insert(code.to_string(), row);
        }
        self
    }

    pub fn unavailable() -> Self {
        Self {
            shape_response: None,
            census: None,
        }
    }
}

#[async_trait]
impl PopulationAnalyzer for StaticPopulationAnalyzer {
    async fn analyze_shape(
        &self,
        _shape_type: &str,
        _shape_data: Value,
    ) -> Result<Value, UpstreamError> {
        self.shape_response.clone().ok_or_else(unavailable)
    }

    async fn census_rows(&self, region_code: &str) -> Result<Vec<Value>, UpstreamError> {
        let census = self.census.as_ref().ok_or_else(unavailable)?;
        Ok(census.get(region_code).cloned().into_iter().collect())
    }

    async fn check_connection(&self) -> Result<Value, UpstreamError> {
        self.census.as_ref().ok_or_else(unavailable)?;
        Ok(json!([{"lng": 126.978, "lat": 37.5665, "x": 953815.0, "y": 1952032.0}]))
    }
}

fn unavailable() -> UpstreamError {
    UpstreamError::Status {
        status: 503,
        body: "service unavailable".to_string(),
    }
}

/// Census row in the column layout of the `census_region` table
pub fn census_row(code: &str) -> Value {
    json!({
        "region_cd": code,
        "pop": 12000,
        "households": "5100",
        "10세미만": 900,
        "10대": 1100,
        "20대": 1500,
        "30대": 1700,
        "40대": 1900,
        "50대": 2000,
        "60대": 1400,
        "70대": 900,
        "80대": 450,
        "90대": 45,
        "100세 이상": 5
    })
}
