//! Request handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use http::header::CONTENT_TYPE;
use serde::Serialize;

use super::AppState;
use crate::github::{PathError, ProjectLocator, UpstreamClient};

const SERIALISATION_FAILURE: &str = "Failed to marshal json";

pub(super) async fn hello() -> &'static str {
    "Hi\n"
}

pub(super) async fn project_info<Client>(
    State(state): State<Arc<AppState<Client>>>,
    Path(path): Path<String>,
) -> Response
where
    Client: UpstreamClient + 'static,
{
    let locator = match ProjectLocator::parse(&path, &state.expected_host) {
        Ok(locator) => locator,
        Err(error) => return rejection(&path, error),
    };

    let info = state.intake.load(&locator).await;
    json_response(&info)
}

/// `/projectinfo/v1/` with nothing after the prefix.
pub(super) async fn project_info_without_path() -> Response {
    rejection("", PathError::IncorrectLength)
}

fn rejection(path: &str, error: PathError) -> Response {
    tracing::info!(path, %error, "rejected project path");
    plain_text(StatusCode::BAD_REQUEST, &error.to_string())
}

fn json_response<T: Serialize>(value: &T) -> Response {
    match serde_json::to_vec(value) {
        Ok(body) => (
            StatusCode::OK,
            [(CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(error) => {
            tracing::error!(%error, "failed to serialise project summary");
            plain_text(StatusCode::INTERNAL_SERVER_ERROR, SERIALISATION_FAILURE)
        }
    }
}

fn plain_text(status: StatusCode, message: &str) -> Response {
    (status, format!("{message}\n")).into_response()
}
