//! HTTP surface of the service.
//!
//! Routes:
//!
//! - `GET /` – plain-text greeting used as a health check.
//! - `GET /projectinfo/v1/<host>/<owner>/<repo>` – JSON project summary.

mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::error::ServiceError;
use crate::github::{ProjectInfoIntake, UpstreamClient};

/// Fixed prefix stripped before the path is validated.
pub const PROJECT_INFO_PREFIX: &str = "/projectinfo/v1/";

/// Shared, read-only state handed to every request.
#[derive(Debug)]
pub struct AppState<Client>
where
    Client: UpstreamClient,
{
    intake: ProjectInfoIntake<Client>,
    expected_host: String,
}

impl<Client> AppState<Client>
where
    Client: UpstreamClient,
{
    /// Bundles the intake facade with the host label paths must start with.
    pub fn new(intake: ProjectInfoIntake<Client>, expected_host: impl Into<String>) -> Self {
        Self {
            intake,
            expected_host: expected_host.into(),
        }
    }
}

/// Builds the application router.
pub fn router<Client>(state: AppState<Client>) -> Router
where
    Client: UpstreamClient + 'static,
{
    Router::new()
        .route("/", get(handlers::hello))
        .route(PROJECT_INFO_PREFIX, get(handlers::project_info_without_path))
        .route("/projectinfo/v1/*path", get(handlers::project_info::<Client>))
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
}

/// Serves `app` on `listener` until Ctrl-C is received.
///
/// # Errors
///
/// Returns [`ServiceError::Io`] when the listener fails.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServiceError> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "listening");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServiceError::from)
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for Ctrl-C; shutting down");
        return;
    }
    tracing::info!("shutdown requested");
}
