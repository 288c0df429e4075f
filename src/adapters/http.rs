use crate::core::{ConfigProvider, RoadmapService};
use crate::domain::model::{RoadmapRequest, RoadmapStep};
use crate::utils::error::{Result, RoadmapError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Path of the roadmap-generation endpoint, resolved against the service origin.
pub const ROADMAP_PATH: &str = "/api/roadmap";

pub struct HttpRoadmapService {
    client: Client,
    endpoint: Url,
    timeout: Duration,
}

impl HttpRoadmapService {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let invalid = |reason: String| RoadmapError::InvalidConfigValue {
            field: "service.base_url".to_string(),
            value: base_url.to_string(),
            reason,
        };

        let base =
            Url::parse(base_url).map_err(|e| invalid(format!("Invalid URL format: {}", e)))?;
        let endpoint = base
            .join(ROADMAP_PATH)
            .map_err(|e| invalid(format!("Cannot resolve {}: {}", ROADMAP_PATH, e)))?;

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint,
            timeout,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.service_url(), config.request_timeout())
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl RoadmapService for HttpRoadmapService {
    async fn generate(&self, request: &RoadmapRequest) -> Result<Vec<RoadmapStep>> {
        tracing::debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RoadmapError::Timeout(self.timeout)
                } else {
                    RoadmapError::Transport(e)
                }
            })?;

        let status = response.status();
        tracing::debug!("Roadmap service response status: {}", status);

        if !status.is_success() {
            return Err(RoadmapError::HttpStatus {
                status: status.as_u16(),
            });
        }

        // Raw bytes: a lossy text conversion would hide invalid UTF-8.
        let body = response.bytes().await?;
        decode_roadmap(&body)
    }
}

/// Decodes the canonical response: a bare JSON array of `{step, days_needed}`.
pub fn decode_roadmap(body: &[u8]) -> Result<Vec<RoadmapStep>> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| RoadmapError::decode(format!("response is not valid JSON: {}", e)))?;

    match value {
        serde_json::Value::Array(_) => serde_json::from_value(value)
            .map_err(|e| RoadmapError::decode(format!("unexpected step entry: {}", e))),
        serde_json::Value::Object(ref obj) if obj.contains_key("roadmap") => {
            Err(RoadmapError::decode(
                "got a wrapped roadmap object, expected a bare array of steps",
            ))
        }
        other => Err(RoadmapError::decode(format!(
            "expected a JSON array of steps, got {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
