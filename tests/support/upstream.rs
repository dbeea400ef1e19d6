//! Wiremock fixtures standing in for the GitHub REST API.

#![expect(clippy::expect_used, reason = "fixture setup failures should abort the test")]

use std::time::Duration;

use axum::Router;
use axum::body::{Body, to_bytes};
use http::{Request, StatusCode};
use projectinfo::{ApiBase, AppState, HttpUpstreamClient, ProjectInfoIntake, router};
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Response captured from the router.
#[derive(Debug, Clone)]
pub struct CapturedResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// `Content-Type` header, when present.
    pub content_type: Option<String>,
    /// Body decoded as UTF-8.
    pub body: String,
}

/// Mounts a JSON response for `GET <route>`.
pub async fn mount_json(server: &MockServer, route: &str, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

/// Mounts the owner, languages, and contributors endpoints of a healthy
/// repository owned by an individual account.
pub async fn mount_healthy_project(server: &MockServer, owner: &str, repository: &str) {
    mount_json(
        server,
        &format!("/users/{owner}"),
        200,
        json!({ "login": owner, "name": "Display Name", "type": "User" }),
    )
    .await;
    mount_json(
        server,
        &format!("/repos/{owner}/{repository}/languages"),
        200,
        json!({ "Go": 12_000, "Shell": 300 }),
    )
    .await;
    mount_json(
        server,
        &format!("/repos/{owner}/{repository}/contributors"),
        200,
        json!([
            { "login": "A", "contributions": 5 },
            { "login": "B", "contributions": 5 },
            { "login": "C", "contributions": 3 }
        ]),
    )
    .await;
}

/// Mounts a known owner whose repository does not exist.
pub async fn mount_missing_repository(server: &MockServer, owner: &str, repository: &str) {
    let not_found = json!({
        "message": "Not Found",
        "documentation_url": "https://docs.github.com/rest"
    });
    mount_json(
        server,
        &format!("/users/{owner}"),
        200,
        json!({ "login": owner, "name": "Apache", "type": "Organization" }),
    )
    .await;
    mount_json(
        server,
        &format!("/repos/{owner}/{repository}/languages"),
        404,
        not_found.clone(),
    )
    .await;
    mount_json(
        server,
        &format!("/repos/{owner}/{repository}/contributors"),
        404,
        not_found,
    )
    .await;
}

/// Builds the service router against `server` with a short upstream timeout.
pub fn app_for(server: &MockServer) -> Router {
    let api = ApiBase::parse(&server.uri()).expect("mock server URI should parse");
    let client = HttpUpstreamClient::with_timeout(Duration::from_secs(2))
        .expect("HTTP client should build");
    router(AppState::new(ProjectInfoIntake::new(client, api), "github.com"))
}

/// Sends `GET <uri>` through `app` and captures the response.
pub async fn get(app: Router, uri: &str) -> CapturedResponse {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    let response = app.oneshot(request).await.expect("router is infallible");

    let status = response.status();
    let content_type = response
        .headers()
        .get(http::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");

    CapturedResponse {
        status,
        content_type,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    }
}
