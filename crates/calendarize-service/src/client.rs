//! HTTP client for the extraction service.
//!
//! One endpoint: POST the user's text plus their local time context, get
//! back event objects. Older deployments answer with a single object,
//! newer ones with an array; both shapes are accepted.

use std::time::Duration;

use chrono::Utc;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ServiceError, ServiceResult};
use crate::raw_event::{GenerateRequest, RawEventRecord};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("calendarize/", env!("CARGO_PKG_VERSION"));

/// Client for the event generation endpoint.
pub struct GenerateClient {
    client: Client,
    endpoint: String,
    time_zone: String,
}

impl GenerateClient {
    /// Creates a client for the given endpoint URL and user timezone.
    pub fn new(endpoint: impl Into<String>, time_zone: impl Into<String>) -> ServiceResult<Self> {
        let endpoint = endpoint.into();
        if endpoint.trim().is_empty() {
            return Err(ServiceError::Configuration(
                "generation endpoint is empty".into(),
            ));
        }

        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            time_zone: time_zone.into(),
        })
    }

    /// Submits free-form text and returns the raw event records.
    pub async fn generate_from_text(&self, text: &str) -> ServiceResult<Vec<RawEventRecord>> {
        let request = GenerateRequest::new(text, Utc::now(), &self.time_zone);
        debug!(endpoint = %self.endpoint, chars = text.len(), "submitting text for conversion");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "generation request failed");
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let value: Value = response.json().await?;
        parse_records(value)
    }
}

/// Parses the response body, accepting both the array and the legacy
/// single-object shape.
fn parse_records(value: Value) -> ServiceResult<Vec<RawEventRecord>> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| {
                serde_json::from_value(item)
                    .map_err(|e| ServiceError::InvalidResponse(e.to_string()))
            })
            .collect(),
        Value::Object(_) => {
            let record: RawEventRecord = serde_json::from_value(value)
                .map_err(|e| ServiceError::InvalidResponse(e.to_string()))?;
            Ok(vec![record])
        }
        other => Err(ServiceError::InvalidResponse(format!(
            "expected object or array, got {}",
            kind_name(&other)
        ))),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
