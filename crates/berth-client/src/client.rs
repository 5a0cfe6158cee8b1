//! The release server operations used by berth

use async_trait::async_trait;
use berth_core::{InstallOptions, InstallResponse};

use crate::error::Result;

/// Client for a release server
///
/// Implementations must be Send + Sync for use across async tasks.
#[async_trait]
pub trait ReleaseClient: Send + Sync {
    /// Ask the server to install a chart
    ///
    /// Performs exactly one request. A successful response may carry no release.
    async fn install_release(&self, options: &InstallOptions) -> Result<InstallResponse>;
}
