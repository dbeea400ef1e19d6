//! Behavioural tests for project summaries served over HTTP.

mod support {
    #[path = "../support/runtime.rs"]
    pub mod runtime;
    #[path = "../support/upstream.rs"]
    pub mod upstream;
}

use std::io;

use projectinfo::RepositoryInfo;
use projectinfo::github::LANGUAGES_PLACEHOLDER;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::json;
use wiremock::MockServer;

use support::runtime::{SharedRuntime, ensure_runtime_and_server};
use support::upstream::{
    CapturedResponse, app_for, get, mount_healthy_project, mount_json, mount_missing_repository,
};

#[derive(ScenarioState, Default)]
struct SummaryState {
    runtime: Slot<SharedRuntime>,
    server: Slot<MockServer>,
    response: Slot<CapturedResponse>,
}

#[fixture]
fn summary_state() -> SummaryState {
    SummaryState::default()
}

fn unquote(value: &str) -> &str {
    value.trim_matches('"')
}

fn missing(what: &str) -> io::Error {
    io::Error::other(format!("{what} not initialised"))
}

fn summary(state: &SummaryState) -> Result<RepositoryInfo, io::Error> {
    let body = state
        .response
        .with_ref(|response| response.body.clone())
        .ok_or_else(|| missing("response"))?;
    serde_json::from_str(&body)
        .map_err(|error| io::Error::other(format!("invalid summary {body:?}: {error}")))
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[given("a mock GitHub API with healthy repository {repository} owned by {owner}")]
fn seed_healthy(
    summary_state: &SummaryState,
    repository: String,
    owner: String,
) -> Result<(), io::Error> {
    let runtime = ensure_runtime_and_server(&summary_state.runtime, &summary_state.server)?;
    summary_state
        .server
        .with_ref(|server| {
            runtime.block_on(mount_healthy_project(
                server,
                unquote(&owner),
                unquote(&repository),
            ));
        })
        .ok_or_else(|| missing("mock server"))
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[given("a mock GitHub API where repository {repository} owned by {owner} does not exist")]
fn seed_missing(
    summary_state: &SummaryState,
    repository: String,
    owner: String,
) -> Result<(), io::Error> {
    let runtime = ensure_runtime_and_server(&summary_state.runtime, &summary_state.server)?;
    summary_state
        .server
        .with_ref(|server| {
            runtime.block_on(mount_missing_repository(
                server,
                unquote(&owner),
                unquote(&repository),
            ));
        })
        .ok_or_else(|| missing("mock server"))
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[given("a mock GitHub API where repository {repository} owned by {owner} has no languages")]
fn seed_without_languages(
    summary_state: &SummaryState,
    repository: String,
    owner: String,
) -> Result<(), io::Error> {
    let runtime = ensure_runtime_and_server(&summary_state.runtime, &summary_state.server)?;
    let owner_handle = unquote(&owner);
    let repository_name = unquote(&repository);
    summary_state
        .server
        .with_ref(|server| {
            runtime.block_on(async {
                mount_json(
                    server,
                    &format!("/users/{owner_handle}"),
                    200,
                    json!({ "login": owner_handle, "type": "User" }),
                )
                .await;
                mount_json(
                    server,
                    &format!("/repos/{owner_handle}/{repository_name}/languages"),
                    200,
                    json!({}),
                )
                .await;
                mount_json(
                    server,
                    &format!("/repos/{owner_handle}/{repository_name}/contributors"),
                    200,
                    json!([]),
                )
                .await;
            });
        })
        .ok_or_else(|| missing("mock server"))
}

#[given("a mock GitHub API with no repositories")]
fn seed_empty(summary_state: &SummaryState) -> Result<(), io::Error> {
    ensure_runtime_and_server(&summary_state.runtime, &summary_state.server).map(|_| ())
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[when("the client requests {uri}")]
fn request(summary_state: &SummaryState, uri: String) -> Result<(), io::Error> {
    let runtime = summary_state.runtime.get().ok_or_else(|| missing("runtime"))?;
    let response = summary_state
        .server
        .with_ref(|server| runtime.block_on(get(app_for(server), unquote(&uri))))
        .ok_or_else(|| missing("mock server"))?;
    summary_state.response.set(response);
    Ok(())
}

#[then("the response status is {status:u64}")]
fn assert_status(summary_state: &SummaryState, status: u64) -> Result<(), io::Error> {
    let actual = summary_state
        .response
        .with_ref(|response| u64::from(response.status.as_u16()))
        .ok_or_else(|| missing("response"))?;
    if actual == status {
        Ok(())
    } else {
        Err(io::Error::other(format!(
            "expected status {status} but got {actual}"
        )))
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the response body is {message}")]
fn assert_body(summary_state: &SummaryState, message: String) -> Result<(), io::Error> {
    let expected = format!("{}\n", unquote(&message));
    let actual = summary_state
        .response
        .with_ref(|response| response.body.clone())
        .ok_or_else(|| missing("response"))?;
    if actual == expected {
        Ok(())
    } else {
        Err(io::Error::other(format!(
            "expected body {expected:?} but got {actual:?}"
        )))
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the summary names project {project}")]
fn assert_project(summary_state: &SummaryState, project: String) -> Result<(), io::Error> {
    let info = summary(summary_state)?;
    if info.project == unquote(&project) {
        Ok(())
    } else {
        Err(io::Error::other(format!(
            "expected project {project} but got {:?}",
            info.project
        )))
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the owner is {owner}")]
fn assert_owner(summary_state: &SummaryState, owner: String) -> Result<(), io::Error> {
    let info = summary(summary_state)?;
    if info.owner == unquote(&owner) {
        Ok(())
    } else {
        Err(io::Error::other(format!(
            "expected owner {owner} but got {:?}",
            info.owner
        )))
    }
}

#[then("the summary reports {count:u64} commits")]
fn assert_commits(summary_state: &SummaryState, count: u64) -> Result<(), io::Error> {
    let info = summary(summary_state)?;
    if info.commits == count {
        Ok(())
    } else {
        Err(io::Error::other(format!(
            "expected {count} commits but got {}",
            info.commits
        )))
    }
}

#[then("the languages field shows the placeholder")]
fn assert_languages_placeholder(summary_state: &SummaryState) -> Result<(), io::Error> {
    let info = summary(summary_state)?;
    if info.languages == [LANGUAGES_PLACEHOLDER] {
        Ok(())
    } else {
        Err(io::Error::other(format!(
            "expected languages placeholder but got {:?}",
            info.languages
        )))
    }
}

#[scenario(path = "tests/features/project_info.feature", index = 0)]
fn healthy_repository(summary_state: SummaryState) {
    let _ = summary_state;
}

#[scenario(path = "tests/features/project_info.feature", index = 1)]
fn missing_repository(summary_state: SummaryState) {
    let _ = summary_state;
}

#[scenario(path = "tests/features/project_info.feature", index = 2)]
fn repository_without_languages(summary_state: SummaryState) {
    let _ = summary_state;
}

#[scenario(path = "tests/features/project_info.feature", index = 3)]
fn other_host_rejected(summary_state: SummaryState) {
    let _ = summary_state;
}

#[scenario(path = "tests/features/project_info.feature", index = 4)]
fn short_path_rejected(summary_state: SummaryState) {
    let _ = summary_state;
}
