//! Berth Core - Core types shared by the berth client and CLI
//!
//! This crate provides the foundational types used throughout berth:
//! - `InstallOptions`: What the operator asked to install
//! - `Release`: The deployed instance returned by the release server
//! - `InstallResponse`: The release server's answer to an install request

pub mod error;
pub mod install;
pub mod release;

pub use error::{CoreError, Result};
pub use install::InstallOptions;
pub use release::{
    ChartMetadata, InstallResponse, Release, ReleaseInfo, ReleaseStatus, format_timestamp,
};
