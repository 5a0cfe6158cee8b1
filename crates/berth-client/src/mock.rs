//! Mock release client for testing
//!
//! Answers every install request with a scripted outcome and records the
//! requests it received, so tests can run without a release server.

use async_trait::async_trait;
use berth_core::{InstallOptions, InstallResponse, Release};
use std::sync::{Arc, RwLock};

use crate::client::ReleaseClient;
use crate::error::{ClientError, Result};

/// In-memory release client for testing
#[derive(Clone)]
pub struct MockReleaseClient {
    /// Outcome returned for every request
    outcome: std::result::Result<InstallResponse, ClientError>,
    /// Requests received, in order
    requests: Arc<RwLock<Vec<InstallOptions>>>,
}

impl MockReleaseClient {
    /// A client that answers with `release` (which may be absent)
    pub fn returning(release: Option<Release>) -> Self {
        Self::with_outcome(Ok(InstallResponse { release }))
    }

    /// A client whose every request fails with `error`
    pub fn failing(error: ClientError) -> Self {
        Self::with_outcome(Err(error))
    }

    fn with_outcome(outcome: std::result::Result<InstallResponse, ClientError>) -> Self {
        Self {
            outcome,
            requests: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Number of install requests received
    pub fn call_count(&self) -> usize {
        self.requests.read().unwrap().len()
    }

    /// All install requests received (for testing)
    pub fn requests(&self) -> Vec<InstallOptions> {
        self.requests.read().unwrap().clone()
    }
}

impl Default for MockReleaseClient {
    fn default() -> Self {
        Self::returning(None)
    }
}

#[async_trait]
impl ReleaseClient for MockReleaseClient {
    async fn install_release(&self, options: &InstallOptions) -> Result<InstallResponse> {
        {
            let mut requests = self.requests.write().unwrap();
            requests.push(options.clone());
        }

        self.outcome.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use berth_core::{ChartMetadata, ReleaseInfo, ReleaseStatus};

    fn create_test_release(name: &str) -> Release {
        Release {
            name: name.to_string(),
            info: ReleaseInfo {
                last_deployed: deployed_at(),
                status: ReleaseStatus::Deployed,
            },
            chart: ChartMetadata {
                name: "mychart".to_string(),
                version: "1.0.0".to_string(),
            },
            manifest: "kind: Pod".to_string(),
        }
    }

    fn deployed_at() -> chrono::DateTime<chrono::Utc> {
        chrono::DateTime::from_timestamp(1_461_164_645, 0).unwrap()
    }

    #[tokio::test]
    async fn test_mock_returns_release_and_records_request() {
        let client = MockReleaseClient::returning(Some(create_test_release("myapp")));

        let options = InstallOptions::new("./mychart").dry_run(true);
        let response = client.install_release(&options).await.unwrap();

        assert_eq!(response.release().unwrap().name, "myapp");
        assert_eq!(client.call_count(), 1);
        assert_eq!(client.requests(), vec![options]);
    }

    #[tokio::test]
    async fn test_mock_failure() {
        let client = MockReleaseClient::failing(ClientError::Connection {
            message: "connection refused".to_string(),
        });

        let result = client.install_release(&InstallOptions::new("mychart")).await;
        assert!(matches!(result, Err(ClientError::Connection { .. })));
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_outcome_repeats_and_clones_share_requests() {
        let client = MockReleaseClient::failing(ClientError::Timeout { seconds: 5 });
        let other = client.clone();

        for _ in 0..2 {
            let result = other.install_release(&InstallOptions::new("mychart")).await;
            assert!(matches!(result, Err(ClientError::Timeout { seconds: 5 })));
        }

        assert_eq!(client.call_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_default_has_no_release() {
        let client = MockReleaseClient::default();
        let response = client.install_release(&InstallOptions::new("mychart")).await.unwrap();
        assert!(response.release().is_none());
    }
}
