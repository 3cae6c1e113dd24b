use crate::domain::error::{AppError, Result};

pub const DEFAULT_HUBSPOT_BASE_URL: &str = "https://api.hubapi.com";

/// Runtime configuration, resolved from the environment once at
/// startup. The rest of the application receives these values as plain
/// parameters and never reads the environment itself.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HubSpot private-app token (`HUBSPOT_TOKEN`, required)
    pub hubspot_token: String,

    /// API base URL (`HUBSPOT_BASE_URL`, optional override)
    pub hubspot_base_url: String,

    /// HTTP bind host (`HTTP_HOST`, default 127.0.0.1)
    pub bind_host: String,

    /// HTTP bind port (`HTTP_PORT`, default 8000)
    pub bind_port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let hubspot_token = std::env::var("HUBSPOT_TOKEN")
            .map_err(|_| AppError::ConfigError("HUBSPOT_TOKEN is not set".to_string()))?;

        let hubspot_base_url = std::env::var("HUBSPOT_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_HUBSPOT_BASE_URL.to_string());

        let bind_host = std::env::var("HTTP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let bind_port = match std::env::var("HTTP_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| AppError::ConfigError(format!("Invalid HTTP_PORT '{}'", raw)))?,
            Err(_) => 8000,
        };

        Ok(Self {
            hubspot_token,
            hubspot_base_url,
            bind_host,
            bind_port,
        })
    }
}
