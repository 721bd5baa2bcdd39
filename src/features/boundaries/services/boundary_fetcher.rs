use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::features::regions::models::RegionLevel;
use crate::modules::supabase::{SupabaseClient, UpstreamError};
use crate::shared::constants::RPC_REGION_BOUNDARY;

/// Remote source of region boundaries
///
/// Returns the raw upstream object; `Ok(None)` means the region has no
/// published boundary. Validation is left to the caller.
#[async_trait]
pub trait BoundaryFetcher: Send + Sync {
    async fn fetch(&self, code: &str, level: RegionLevel) -> Result<Option<Value>, UpstreamError>;
}

/// Fetches boundaries through the `get_region_boundary_wgs84` RPC
pub struct SupabaseBoundaryFetcher {
    client: Arc<SupabaseClient>,
}

impl SupabaseBoundaryFetcher {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BoundaryFetcher for SupabaseBoundaryFetcher {
    async fn fetch(&self, code: &str, level: RegionLevel) -> Result<Option<Value>, UpstreamError> {
        let params = json!({
            "p_region_code": code,
            "p_level": level.upstream_name(),
        });

        let result = self.client.rpc(RPC_REGION_BOUNDARY, &params).await?;
        Ok(boundary_from_rpc(result))
    }
}

/// Map a boundary RPC result to the raw boundary object
///
/// `null` and `[]` mean the region has no boundary. Anything else is passed
/// on for validation.
fn boundary_from_rpc(result: Value) -> Option<Value> {
    match result {
        Value::Null => None,
        Value::Array(rows) if rows.is_empty() => None,
        // Set-returning functions wrap the object in a one-row array
        Value::Array(mut rows) if rows.len() == 1 => Some(rows.remove(0)),
        other => Some(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::boundaries::models::BoundaryPayload;
    use crate::shared::test_helpers::boundary_json;

    #[test]
    fn test_empty_results_mean_no_boundary() {
        assert_eq!(boundary_from_rpc(Value::Null), None);
        assert_eq!(boundary_from_rpc(json!([])), None);
    }

    #[test]
    fn test_single_row_is_unwrapped() {
        let row = boundary_json(4);
        let boundary = boundary_from_rpc(json!([row.clone()])).unwrap();

        assert_eq!(boundary, row);
        assert!(BoundaryPayload::from_upstream(boundary).is_ok());
    }

    #[test]
    fn test_bare_object_passes_through() {
        let row = boundary_json(5);
        assert_eq!(boundary_from_rpc(row.clone()), Some(row));
    }

    #[test]
    fn test_multiple_rows_fail_validation() {
        let rows = json!([boundary_json(4), boundary_json(4)]);
        let passed_on = boundary_from_rpc(rows.clone()).unwrap();

        assert_eq!(passed_on, rows);
        assert!(BoundaryPayload::from_upstream(passed_on).is_err());
    }
}
