//! HTTP release server client
//!
//! Install requests are posted as JSON to `{base}/v1/releases`. The server
//! answers with `{"release": ...}` on success, or a non-2xx status with a
//! `{"message": ...}` body.

use async_trait::async_trait;
use berth_core::{InstallOptions, InstallResponse};
use serde::Deserialize;

use crate::client::ReleaseClient;
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// Error body sent by the release server
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// HTTP release server client
pub struct HttpReleaseClient {
    /// Connection settings
    config: ClientConfig,
    /// Pre-computed install URL
    install_url: String,
    /// Underlying HTTP client
    client: reqwest::Client,
}

impl HttpReleaseClient {
    /// Create a client for the configured endpoint
    pub fn new(config: ClientConfig) -> Result<Self> {
        let install_url = config.install_url()?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Http {
                message: e.to_string(),
            })?;

        Ok(Self {
            config,
            install_url,
            client,
        })
    }

    /// Map a transport failure, keeping the endpoint and configured timeout
    fn transport_error(&self, e: reqwest::Error) -> ClientError {
        if e.is_timeout() {
            ClientError::Timeout {
                seconds: self.config.timeout.as_secs(),
            }
        } else if e.is_connect() {
            ClientError::Connection {
                message: format!("{}: {}", self.config.endpoint, e),
            }
        } else {
            ClientError::from(e)
        }
    }
}

#[async_trait]
impl ReleaseClient for HttpReleaseClient {
    async fn install_release(&self, options: &InstallOptions) -> Result<InstallResponse> {
        tracing::debug!(
            url = %self.install_url,
            chart = options.chart(),
            dry_run = options.is_dry_run(),
            "sending install request"
        );

        let response = self
            .client
            .post(&self.install_url)
            .json(options)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or_else(|_| String::from_utf8_lossy(&body).trim().to_string());
            let message = if message.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            } else {
                message
            };

            tracing::debug!(status = status.as_u16(), %message, "install request rejected");
            return Err(ClientError::Server {
                status: status.as_u16(),
                message,
            });
        }

        Ok(InstallResponse::from_slice(&body)?)
    }
}
