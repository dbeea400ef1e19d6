//! Tracing subscriber setup for the service binary.
//!
//! Library code only emits `tracing` events; the binary installs one global
//! subscriber at startup. `RUST_LOG` wins over the configured filter so a
//! single run can be made more verbose without touching configuration.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::ServiceError;

/// Builds the filter from `RUST_LOG`, falling back to `fallback`.
///
/// # Errors
///
/// Returns [`ServiceError::Logging`] when `fallback` is not a valid filter
/// directive.
pub fn build_filter(fallback: &str) -> Result<EnvFilter, ServiceError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(fallback).map_err(|error| ServiceError::Logging {
        message: format!("invalid log filter {fallback:?}: {error}"),
    })
}

/// Installs a plaintext stderr subscriber as the global default.
///
/// # Errors
///
/// Returns [`ServiceError::Logging`] when the filter is invalid or a global
/// subscriber is already installed.
pub fn init(fallback_filter: &str) -> Result<(), ServiceError> {
    let filter = build_filter(fallback_filter)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|error| ServiceError::Logging {
            message: error.to_string(),
        })
}
