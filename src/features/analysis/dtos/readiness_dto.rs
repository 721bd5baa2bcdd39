use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Reachability of the analysis backend
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReadinessDto {
    #[schema(example = "ready")]
    pub status: String,
    /// `success` or `error`
    pub database: String,
    /// Raw answer of the check call
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub database_data: Option<Value>,
}

impl ReadinessDto {
    pub fn ready(database_data: Value) -> Self {
        Self {
            status: "ready".to_string(),
            database: "success".to_string(),
            database_data: Some(database_data),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            status: "unavailable".to_string(),
            database: "error".to_string(),
            database_data: None,
        }
    }
}
