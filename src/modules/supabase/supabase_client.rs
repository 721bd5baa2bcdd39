//! Thin PostgREST client over reqwest
//!
//! - `rpc` → `POST {url}/rest/v1/rpc/{function}` with a JSON argument object
//! - `select_eq` → `GET {url}/rest/v1/{table}?{column}=eq.{value}&select=*`

use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::core::config::SupabaseConfig;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Supabase request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Supabase returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse Supabase response: {0}")]
    Parse(String),
}

pub struct SupabaseClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseClient {
    pub fn new(config: &SupabaseConfig) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .user_agent("RegionBoundaryService/1.0")
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Call a Postgres function exposed through PostgREST
    pub async fn rpc(&self, function: &str, params: &Value) -> Result<Value, UpstreamError> {
        let url = format!("{}/rest/v1/rpc/{}", self.base_url, function);
        debug!("Supabase RPC {} with {}", function, params);

        let response = self
            .authorized(self.client.post(&url))
            .json(params)
            .send()
            .await
            .map_err(|e| {
                error!("Supabase RPC {} failed: {:?}", function, e);
                UpstreamError::Request(e)
            })?;

        Self::parse_json(response).await
    }

    /// Fetch all rows of `table` where `column` equals `value`
    pub async fn select_eq(
        &self,
        table: &str,
        column: &str,
        value: &str,
    ) -> Result<Vec<Value>, UpstreamError> {
        let url = format!("{}/rest/v1/{}", self.base_url, table);
        let filter = format!("eq.{}", value);
        debug!("Supabase select {} where {} = {}", table, column, value);

        let response = self
            .authorized(self.client.get(&url))
            .query(&[(column, filter.as_str()), ("select", "*")])
            .send()
            .await
            .map_err(|e| {
                error!("Supabase select on {} failed: {:?}", table, e);
                UpstreamError::Request(e)
            })?;

        match Self::parse_json(response).await? {
            Value::Array(rows) => Ok(rows),
            other => Err(UpstreamError::Parse(format!(
                "expected an array of rows from {}, got {}",
                table, other
            ))),
        }
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn parse_json(response: Response) -> Result<Value, UpstreamError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Supabase returned status {}: {}", status, body);
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).map_err(|e| UpstreamError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = SupabaseConfig {
            url: "https://example.supabase.co/".to_string(),
            api_key: "anon".to_string(),
            timeout: Duration::from_secs(5),
        };
        let client = SupabaseClient::new(&config).unwrap();
        assert_eq!(client.base_url, "https://example.supabase.co");
    }

    #[test]
    fn test_status_error_message() {
        let err = UpstreamError::Status {
            status: 404,
            body: "function not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Supabase returned status 404: function not found"
        );
    }
}
