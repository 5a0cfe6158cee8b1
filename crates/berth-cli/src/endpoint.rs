//! Release server address resolution
//!
//! The address comes from, in order: the `--host` flag, the `BERTH_HOST`
//! environment variable, the built-in default. Empty values count as unset.

use std::ffi::OsString;
use std::fmt;

/// Environment variable consulted when `--host` is empty
pub const HOST_ENV_VAR: &str = "BERTH_HOST";

/// Address used when neither flag nor environment supply one
pub const DEFAULT_HOST: &str = ":44134";

/// Where a resolved address came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointSource {
    Flag,
    Environment,
    Default,
}

impl fmt::Display for EndpointSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Flag => "--host flag",
            Self::Environment => "environment",
            Self::Default => "default",
        };
        write!(f, "{}", s)
    }
}

/// The release server address for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerEndpoint {
    address: String,
    source: EndpointSource,
}

impl ServerEndpoint {
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn source(&self) -> EndpointSource {
        self.source
    }
}

impl fmt::Display for ServerEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

/// Resolves the release server address with flag > environment > default precedence
#[derive(Debug, Clone)]
pub struct EndpointResolver {
    env_var: String,
    default: String,
}

impl Default for EndpointResolver {
    fn default() -> Self {
        Self::new(HOST_ENV_VAR, DEFAULT_HOST)
    }
}

impl EndpointResolver {
    pub fn new(env_var: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            env_var: env_var.into(),
            default: default.into(),
        }
    }

    /// Resolve using the current process environment
    pub fn resolve(&self, flag: &str) -> ServerEndpoint {
        let env_value = decode_env_value(&self.env_var, std::env::var_os(&self.env_var));
        self.resolve_with(flag, env_value.as_deref())
    }

    /// Resolve from explicit inputs
    pub fn resolve_with(&self, flag: &str, env_value: Option<&str>) -> ServerEndpoint {
        let (address, source) = if !flag.is_empty() {
            (flag, EndpointSource::Flag)
        } else if let Some(value) = env_value.filter(|v| !v.is_empty()) {
            (value, EndpointSource::Environment)
        } else {
            (self.default.as_str(), EndpointSource::Default)
        };

        tracing::debug!(%address, %source, "resolved release server address");

        ServerEndpoint {
            address: address.to_string(),
            source,
        }
    }
}

/// A set variable is never treated as unset, even when it is not valid UTF-8
fn decode_env_value(name: &str, raw: Option<OsString>) -> Option<String> {
    match raw?.into_string() {
        Ok(value) => Some(value),
        Err(raw) => {
            tracing::warn!(variable = name, "value is not valid UTF-8, using lossy conversion");
            Some(raw.to_string_lossy().into_owned())
        }
    }
}
