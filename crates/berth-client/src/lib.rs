//! Berth release server client
//!
//! This crate talks to the release server on behalf of the CLI:
//!
//! - **`ReleaseClient`**: the one operation the CLI needs, `install_release`
//! - **`HttpReleaseClient`**: JSON over HTTP against a resolved endpoint
//! - **`MockReleaseClient`**: in-memory client with scripted outcomes, for tests
//!
//! ## Example
//!
//! ```rust,no_run
//! use berth_client::{ClientConfig, HttpReleaseClient, ReleaseClient};
//! use berth_core::InstallOptions;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpReleaseClient::new(ClientConfig::new(":44134"))?;
//! let response = client
//!     .install_release(&InstallOptions::new("./mychart").dry_run(true))
//!     .await?;
//!
//! if let Some(release) = response.release() {
//!     println!("{}", release.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod mock;

pub use client::ReleaseClient;
pub use config::{ClientConfig, DEFAULT_TIMEOUT};
pub use error::{ClientError, Result};
pub use http::HttpReleaseClient;
pub use mock::MockReleaseClient;
