use crate::domain::error::{AppError, Result};
use crate::domain::property::BatchRequest;
use async_trait::async_trait;
use serde_json::Value;

/// What HubSpot answered, passed through verbatim. A non-success status
/// is still a successful call here; only transport or decode failures
/// become errors.
#[derive(Debug, Clone)]
pub struct BatchCreateResponse {
    pub status_code: u16,
    pub body: Value,
}

/// Destination for assembled property batches.
#[async_trait]
pub trait PropertySink: Send + Sync {
    async fn batch_create(&self, request: &BatchRequest) -> Result<BatchCreateResponse>;
}

/// HubSpot CRM v3 properties client.
pub struct HubSpotClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl HubSpotClient {
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }
}

#[async_trait]
impl PropertySink for HubSpotClient {
    async fn batch_create(&self, request: &BatchRequest) -> Result<BatchCreateResponse> {
        let url = format!("{}/crm/v3/properties/contact/batch/create", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::UpstreamError(format!("Request failed: {}", e)))?;

        let status_code = response.status().as_u16();
        let body: Value = response
            .json()
            .await
            .map_err(|e| AppError::UpstreamError(format!("Failed to parse JSON: {}", e)))?;

        Ok(BatchCreateResponse { status_code, body })
    }
}
