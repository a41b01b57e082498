//! `tracing` subscriber installation.

use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The fallback filter directive does not parse.
    #[error("invalid log filter '{directive}': {reason}")]
    InvalidFilter {
        /// Directive that failed to parse.
        directive: String,
        /// Parser message.
        reason: String,
    },

    /// A global subscriber is already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Installs a formatted subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence; `fallback` is used when it is unset or
/// invalid. Stdout stays free for replies.
///
/// # Errors
///
/// Returns [`TelemetryError`] when `fallback` does not parse or a global
/// subscriber already exists.
pub fn init(fallback: &str) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => fallback_filter(fallback)?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| TelemetryError::Install(e.to_string()))
}

fn fallback_filter(directive: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(directive).map_err(|e| TelemetryError::InvalidFilter {
        directive: directive.to_owned(),
        reason: e.to_string(),
    })
}
