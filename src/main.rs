//! Projectinfo HTTP service entrypoint.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use projectinfo::{
    AppState, HttpUpstreamClient, ProjectInfoConfig, ProjectInfoIntake, ServiceError, router,
    serve, telemetry,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServiceError> {
    let config = load_config()?;
    telemetry::init(config.log_filter())?;

    // Configuration errors surface before the socket is bound.
    let addr = config.listen_addr()?;
    let api = config.api_base()?;
    let client = HttpUpstreamClient::with_timeout(config.request_timeout())?;

    tracing::info!(
        api_base = %api.as_url(),
        expected_host = config.expected_host(),
        timeout = ?config.request_timeout(),
        "starting projectinfo"
    );

    let state = AppState::new(ProjectInfoIntake::new(client, api), config.expected_host());
    let listener = TcpListener::bind(addr).await?;
    serve(listener, router(state)).await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ServiceError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<ProjectInfoConfig, ServiceError> {
    ProjectInfoConfig::load().map_err(|error| ServiceError::Configuration {
        message: error.to_string(),
    })
}
