//! Client configuration
//!
//! The endpoint is resolved by the caller for each invocation and handed in
//! explicitly; nothing here reads process-wide state.

use std::time::Duration;
use url::Url;

use crate::error::{ClientError, Result};

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Host used when an address only names a port (`:44134`)
const LOCAL_HOST: &str = "127.0.0.1";

/// Connection settings for a release server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server address as given by the operator (`:44134`, `host:port` or a URL)
    pub endpoint: String,

    /// Timeout for a single request
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a config for `endpoint` with the default timeout
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Normalized base URL of the server, without trailing slash
    ///
    /// - `:44134` becomes `http://127.0.0.1:44134`
    /// - `host:port` becomes `http://host:port`
    /// - `http://` and `https://` URLs are kept as they are
    pub fn base_url(&self) -> Result<String> {
        let address = self.endpoint.trim();
        if address.is_empty() {
            return Err(self.invalid("address is empty"));
        }

        let candidate = if address.starts_with(':') {
            format!("http://{}{}", LOCAL_HOST, address)
        } else if address.contains("://") {
            address.to_string()
        } else {
            format!("http://{}", address)
        };

        let url = Url::parse(&candidate).map_err(|e| self.invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => {}
            other => return Err(self.invalid(format!("unsupported scheme '{}'", other))),
        }
        if url.host_str().is_none() {
            return Err(self.invalid("missing host"));
        }

        Ok(candidate.trim_end_matches('/').to_string())
    }

    /// URL that install requests are posted to
    pub fn install_url(&self) -> Result<String> {
        Ok(format!("{}/v1/releases", self.base_url()?))
    }

    fn invalid(&self, reason: impl Into<String>) -> ClientError {
        ClientError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            reason: reason.into(),
        }
    }
}
