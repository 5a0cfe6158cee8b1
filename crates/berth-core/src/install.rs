//! Install request options

use serde::{Deserialize, Serialize};

/// Options for a single install request
///
/// Built once per invocation and never mutated afterwards. The builder
/// methods consume `self`, so a value handed to a client is final.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallOptions {
    /// Chart reference: a path to a chart directory or archive, or the name
    /// of a chart in the current working directory
    chart: String,

    /// Simulate the install without persisting anything
    #[serde(default)]
    dry_run: bool,
}

impl InstallOptions {
    /// Create options for installing `chart`
    pub fn new(chart: impl Into<String>) -> Self {
        Self {
            chart: chart.into(),
            dry_run: false,
        }
    }

    /// Set dry-run mode
    #[must_use]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// The chart reference to install
    pub fn chart(&self) -> &str {
        &self.chart
    }

    /// Whether this is a simulated install
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}
