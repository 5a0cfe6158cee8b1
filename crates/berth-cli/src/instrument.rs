//! Tracing setup for the berth binary
//!
//! Logs go to stderr so stdout only carries rendered releases.
//! `RUST_LOG` takes precedence over the `--debug` flag.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber; only the first call takes effect
pub fn init(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(debug).with_writer(std::io::stderr))
        .try_init()
        .ok();
}
