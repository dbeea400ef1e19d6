//! High-level facade that builds a [`RepositoryInfo`] for a project.

use super::client::UpstreamClient;
use super::error::LookupError;
use super::locator::{ApiBase, ProjectLocator};
use super::models::{
    CONTRIBUTORS_PLACEHOLDER, CommitTally, LANGUAGES_PLACEHOLDER, OWNER_PLACEHOLDER,
    RepositoryInfo,
};
use super::resolvers::{resolve_contributors, resolve_languages, resolve_owner};

/// Loads the owner, languages and contributors of a project concurrently and
/// folds them into one summary.
#[derive(Debug)]
pub struct ProjectInfoIntake<Client>
where
    Client: UpstreamClient,
{
    client: Client,
    api: ApiBase,
}

impl<Client> ProjectInfoIntake<Client>
where
    Client: UpstreamClient,
{
    /// Create a new intake facade issuing lookups against `api`.
    #[must_use]
    pub const fn new(client: Client, api: ApiBase) -> Self {
        Self { client, api }
    }

    /// Load the summary for `locator`.
    ///
    /// This never fails: a lookup that errors is logged and its field is
    /// replaced by a placeholder.
    pub async fn load(&self, locator: &ProjectLocator) -> RepositoryInfo {
        let (owner, languages, contributors) = tokio::join!(
            resolve_owner(&self.client, &self.api, locator.owner()),
            resolve_languages(&self.client, &self.api, locator),
            resolve_contributors(&self.client, &self.api, locator),
        );

        aggregate(locator, owner, languages, contributors)
    }
}

/// Folds the three lookup outcomes into a summary, substituting each failed
/// field independently.
#[must_use]
pub fn aggregate(
    locator: &ProjectLocator,
    owner: Result<String, LookupError>,
    languages: Result<Vec<String>, LookupError>,
    contributors: Result<CommitTally, LookupError>,
) -> RepositoryInfo {
    let project = locator.repository().as_str();

    let owner_name = owner.unwrap_or_else(|error| {
        log_degraded(project, "owner", &error);
        OWNER_PLACEHOLDER.to_owned()
    });

    let language_list = languages.unwrap_or_else(|error| {
        log_degraded(project, "languages", &error);
        vec![LANGUAGES_PLACEHOLDER.to_owned()]
    });

    let CommitTally {
        top_committers,
        total_commits,
    } = contributors.unwrap_or_else(|error| {
        log_degraded(project, "contributors", &error);
        CommitTally {
            top_committers: vec![CONTRIBUTORS_PLACEHOLDER.to_owned()],
            total_commits: 0,
        }
    });

    RepositoryInfo {
        project: project.to_owned(),
        owner: owner_name,
        top_committers,
        commits: total_commits,
        languages: language_list,
    }
}

fn log_degraded(project: &str, field: &str, error: &LookupError) {
    tracing::warn!(project, field, %error, "lookup failed; using placeholder");
}
