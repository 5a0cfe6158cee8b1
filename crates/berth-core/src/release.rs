//! Release types returned by the release server

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Layout used when showing deployment times to the operator (ANSI C style, UTC)
const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// A deployed instance of a chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    /// Release name (generated by the server when not requested)
    pub name: String,

    /// Deployment information
    pub info: ReleaseInfo,

    /// Metadata of the chart this release was installed from
    pub chart: ChartMetadata,

    /// Rendered manifest (all resources of the release)
    #[serde(default)]
    pub manifest: String,
}

/// Deployment state of a release
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseInfo {
    /// When the release was last deployed
    pub last_deployed: DateTime<Utc>,

    /// Current status
    #[serde(default)]
    pub status: ReleaseStatus,
}

/// Chart name and version recorded on a release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartMetadata {
    pub name: String,
    pub version: String,
}

/// Release status
///
/// Note: This enum is non-exhaustive - new variants may be added in future versions.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ReleaseStatus {
    Deployed,
    Deleted,
    Superseded,
    Failed,
    /// Also used for any status this client does not recognize
    #[default]
    #[serde(other)]
    Unknown,
}

impl ReleaseStatus {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Deployed => "DEPLOYED",
            Self::Deleted => "DELETED",
            Self::Superseded => "SUPERSEDED",
            Self::Failed => "FAILED",
        }
    }
}

impl std::fmt::Display for ReleaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The release server's answer to an install request
///
/// `release` may be absent even when the request succeeded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstallResponse {
    #[serde(default)]
    pub release: Option<Release>,
}

impl InstallResponse {
    /// Parse a response body
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Borrow the release, if any
    pub fn release(&self) -> Option<&Release> {
        self.release.as_ref()
    }
}

/// Format a deployment timestamp for display
///
/// Always rendered in UTC, so output does not depend on the local time zone.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}
