//! Data models for the aggregated project summary and the GitHub payloads it
//! is built from.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Placeholder for an owner whose lookup failed.
pub const OWNER_PLACEHOLDER: &str = "Could not find owner name";
/// Placeholder for a language list whose lookup failed.
pub const LANGUAGES_PLACEHOLDER: &str = "Could not find languages";
/// Placeholder for a contributor list whose lookup failed.
pub const CONTRIBUTORS_PLACEHOLDER: &str = "Could not find contributors";

/// Aggregated summary returned by `/projectinfo/v1/<host>/<owner>/<repo>`.
///
/// Every field is either real data or its placeholder; a failed lookup
/// never removes a field from the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryInfo {
    /// Repository name exactly as requested.
    #[serde(rename = "Project")]
    pub project: String,
    /// Display name of the owning account.
    #[serde(rename = "Owner")]
    pub owner: String,
    /// Every login tied for the highest contribution count.
    #[serde(rename = "TopCommitter")]
    pub top_committers: Vec<String>,
    /// Sum of all contributions.
    #[serde(rename = "Commits")]
    pub commits: u64,
    /// Languages used by the repository, in no particular order.
    #[serde(rename = "Languages")]
    pub languages: Vec<String>,
}

/// Kind of GitHub account behind an owner handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// An organization account.
    Organization,
    /// A user, bot, or anything else.
    Individual,
}

impl AccountKind {
    fn from_api(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("organization") {
            Self::Organization
        } else {
            Self::Individual
        }
    }
}

/// Owner account as described by `GET /users/<owner>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    /// Display name; may be empty.
    pub name: String,
    /// Login handle.
    pub login: String,
    /// Account kind.
    pub kind: AccountKind,
}

impl UserIdentity {
    /// Name shown for the owner: the display name of an organization,
    /// otherwise the login handle.
    ///
    /// An organization without a display name yields an empty string rather
    /// than falling back to the login.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.kind {
            AccountKind::Organization => self.name.as_str(),
            AccountKind::Individual => self.login.as_str(),
        }
    }
}

/// One entry of `GET /repos/<owner>/<repo>/contributors`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContributorRecord {
    /// Contributor login handle.
    pub login: String,
    /// Number of contributions attributed to the login.
    pub contributions: u64,
}

/// Top contributor(s) and grand total derived from a contributor list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitTally {
    /// Logins sharing the highest contribution count.
    pub top_committers: Vec<String>,
    /// Sum of every contribution count.
    pub total_commits: u64,
}

impl CommitTally {
    /// Tallies contributors in the order given.
    ///
    /// Ties with the running maximum are appended; a strictly larger count
    /// replaces the winners. The input order is not assumed to be sorted.
    #[must_use]
    pub fn from_records(records: &[ContributorRecord]) -> Self {
        let mut tally = Self::default();
        let mut highest = 0_u64;

        for record in records {
            tally.total_commits = tally.total_commits.saturating_add(record.contributions);
            if record.contributions == highest {
                tally.top_committers.push(record.login.clone());
            } else if record.contributions > highest {
                tally.top_committers = vec![record.login.clone()];
                highest = record.contributions;
            }
        }

        tally
    }
}

/// Error envelope GitHub embeds in response bodies, e.g.
/// `{"message": "Not Found", "documentation_url": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ErrorEnvelope {
    pub(crate) message: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ApiUser {
    pub(crate) name: Option<String>,
    pub(crate) login: Option<String>,
    #[serde(rename = "type")]
    pub(crate) kind: Option<String>,
    pub(crate) message: Option<String>,
}

/// What `GET /users/<owner>` turned out to describe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum UserPayload {
    Found(UserIdentity),
    NotFound(ErrorEnvelope),
}

impl From<ApiUser> for UserPayload {
    fn from(value: ApiUser) -> Self {
        match value.message {
            Some(message) if message.eq_ignore_ascii_case("not found") => {
                Self::NotFound(ErrorEnvelope { message })
            }
            _ => Self::Found(UserIdentity {
                name: value.name.unwrap_or_default(),
                login: value.login.unwrap_or_default(),
                kind: AccountKind::from_api(value.kind.as_deref().unwrap_or_default()),
            }),
        }
    }
}

/// What `GET /repos/<owner>/<repo>/languages` turned out to describe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LanguagesPayload {
    Languages(Vec<String>),
    Error(ErrorEnvelope),
}

impl From<BTreeMap<String, serde_json::Value>> for LanguagesPayload {
    fn from(value: BTreeMap<String, serde_json::Value>) -> Self {
        if let Some(message) = value.get("message") {
            let text = message
                .as_str()
                .map_or_else(|| message.to_string(), ToOwned::to_owned);
            return Self::Error(ErrorEnvelope { message: text });
        }
        Self::Languages(value.into_keys().collect())
    }
}
