use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::modules::supabase::{SupabaseClient, UpstreamError};
use crate::shared::constants::{
    CONNECTION_CHECK_POINT, RPC_ANALYZE_SERVICE_AREA, RPC_CONNECTION_CHECK, TABLE_CENSUS_REGION,
};

/// Remote population backend
#[async_trait]
pub trait PopulationAnalyzer: Send + Sync {
    /// Run the spatial analysis function over a drawn shape
    async fn analyze_shape(&self, shape_type: &str, shape_data: Value)
        -> Result<Value, UpstreamError>;

    /// Census rows recorded for an administrative region code
    async fn census_rows(&self, region_code: &str) -> Result<Vec<Value>, UpstreamError>;

    /// Round-trip a trivial call to confirm the backend answers
    async fn check_connection(&self) -> Result<Value, UpstreamError>;
}

pub struct SupabasePopulationAnalyzer {
    client: Arc<SupabaseClient>,
}

impl SupabasePopulationAnalyzer {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PopulationAnalyzer for SupabasePopulationAnalyzer {
    async fn analyze_shape(
        &self,
        shape_type: &str,
        shape_data: Value,
    ) -> Result<Value, UpstreamError> {
        let params = json!({
            "shape_type": shape_type,
            "shape_data": shape_data,
        });

        let result = self.client.rpc(RPC_ANALYZE_SERVICE_AREA, &params).await?;
        Ok(single_row(result))
    }

    async fn check_connection(&self) -> Result<Value, UpstreamError> {
        let params = json!({
            "lng": CONNECTION_CHECK_POINT.0,
            "lat": CONNECTION_CHECK_POINT.1,
        });
        self.client.rpc(RPC_CONNECTION_CHECK, &params).await
    }

    async fn census_rows(&self, region_code: &str) -> Result<Vec<Value>, UpstreamError> {
        self.client
            .select_eq(TABLE_CENSUS_REGION, "region_cd", region_code)
            .await
    }
}

/// Unwrap the one-row array a set-returning function answers with
fn single_row(result: Value) -> Value {
    match result {
        Value::Array(mut rows) if rows.len() == 1 => rows.remove(0),
        other => other,
    }
}
