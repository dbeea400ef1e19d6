//! Service configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in service defaults
//! 2. **Configuration file** – `.projectinfo.toml` in the current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables** – `PROJECTINFO_PORT`, `PROJECTINFO_API_BASE`,
//!    and so on, plus the legacy `PORT` for the listen port
//! 4. **Command-line arguments** – `--port`/`-p`, `--api-base`, ...
//!
//! # Configuration File
//!
//! ```toml
//! port = 8080
//! api_base = "https://api.github.com"
//! expected_host = "github.com"
//! request_timeout_secs = 10
//! log_filter = "info,projectinfo=debug"
//! ```

use std::env;
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::github::client::DEFAULT_TIMEOUT_SECS;
use crate::github::locator::{ApiBase, DEFAULT_API_BASE, DEFAULT_EXPECTED_HOST};

/// Legacy environment variable naming the listen port.
pub const LEGACY_PORT_VAR: &str = "PORT";

const DEFAULT_LOG_FILTER: &str = "info";

/// Service configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `PROJECTINFO_PORT`, `PORT`, or `--port`: Listen port (required)
/// - `PROJECTINFO_API_BASE` or `--api-base`: GitHub REST API base URL
/// - `PROJECTINFO_EXPECTED_HOST` or `--expected-host`: Accepted host label
/// - `PROJECTINFO_REQUEST_TIMEOUT_SECS` or `--request-timeout-secs`: Upstream
///   call timeout
/// - `PROJECTINFO_LOG_FILTER` or `--log-filter`: Tracing filter directive
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use projectinfo::ProjectInfoConfig;
///
/// let config = ProjectInfoConfig::load().expect("failed to load configuration");
/// let addr = config.listen_addr().expect("port required");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "PROJECTINFO",
    discovery(
        dotfile_name = ".projectinfo.toml",
        config_file_name = "projectinfo.toml",
        app_name = "projectinfo"
    )
)]
pub struct ProjectInfoConfig {
    /// Port the HTTP listener binds on all interfaces.
    ///
    /// Can be provided via:
    /// - CLI: `--port <PORT>` or `-p <PORT>`
    /// - Environment: `PROJECTINFO_PORT` or `PORT` (legacy)
    /// - Config file: `port = 8080`
    #[ortho_config(cli_short = 'p')]
    pub port: Option<u16>,

    /// Base URL of the GitHub REST API.
    ///
    /// Defaults to `https://api.github.com`.
    pub api_base: Option<String>,

    /// Host label the first path segment must match, ignoring case.
    ///
    /// Defaults to `github.com`.
    pub expected_host: Option<String>,

    /// Seconds each upstream call may take before it counts as failed.
    pub request_timeout_secs: Option<u64>,

    /// `tracing` filter directive; `RUST_LOG` takes precedence when set.
    pub log_filter: Option<String>,
}

impl ProjectInfoConfig {
    /// Resolves the listen port from configuration or the legacy `PORT`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::MissingPort`] when no source provides a port
    /// and [`ServiceError::InvalidPort`] when `PORT` is not a port number.
    pub fn resolve_port(&self) -> Result<u16, ServiceError> {
        if let Some(port) = self.port {
            return Ok(port);
        }

        let raw = env::var(LEGACY_PORT_VAR).map_err(|_| ServiceError::MissingPort)?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ServiceError::MissingPort);
        }
        trimmed
            .parse::<u16>()
            .map_err(|_| ServiceError::InvalidPort { value: raw.clone() })
    }

    /// Socket address the listener binds: every interface on the resolved
    /// port.
    ///
    /// # Errors
    ///
    /// Propagates [`ProjectInfoConfig::resolve_port`] failures.
    pub fn listen_addr(&self) -> Result<SocketAddr, ServiceError> {
        let port = self.resolve_port()?;
        Ok(SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)))
    }

    /// Parses the configured API base, falling back to the public GitHub API.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidUrl`] when the value is not an absolute
    /// URL.
    pub fn api_base(&self) -> Result<ApiBase, ServiceError> {
        let raw = self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE);
        ApiBase::parse(raw).map_err(|error| ServiceError::InvalidUrl(format!("{raw}: {error}")))
    }

    /// Host label accepted in the first path segment.
    #[must_use]
    pub fn expected_host(&self) -> &str {
        self.expected_host
            .as_deref()
            .unwrap_or(DEFAULT_EXPECTED_HOST)
    }

    /// Timeout applied to each upstream call.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Tracing filter directive used when `RUST_LOG` is unset.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
