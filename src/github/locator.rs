//! Request path validation and upstream URL construction.

use url::Url;

use super::error::{LookupError, PathError};

/// Host label accepted in the first path segment unless configured otherwise.
pub const DEFAULT_EXPECTED_HOST: &str = "github.com";

/// Public GitHub REST API base.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    pub(crate) fn new(value: &str) -> Result<Self, PathError> {
        if value.is_empty() {
            return Err(PathError::MissingSegment);
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    pub(crate) fn new(value: &str) -> Result<Self, PathError> {
        if value.is_empty() {
            return Err(PathError::MissingSegment);
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// A validated `<host>/<owner>/<repo>` request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLocator {
    owner: RepositoryOwner,
    repository: RepositoryName,
}

impl ProjectLocator {
    /// Validates a `/`-separated path of the form `<host>/<owner>/<repo>`.
    ///
    /// # Errors
    ///
    /// See [`ProjectLocator::from_segments`].
    pub fn parse(path: &str, expected_host: &str) -> Result<Self, PathError> {
        let segments: Vec<&str> = path.split('/').collect();
        Self::from_segments(&segments, expected_host)
    }

    /// Validates already-split path segments.
    ///
    /// The host comparison ignores ASCII case.
    ///
    /// # Errors
    ///
    /// Returns `PathError::IncorrectLength` unless there are exactly three
    /// segments, `PathError::UnexpectedHost` when the first segment is not
    /// `expected_host`, and `PathError::MissingSegment` when the owner or
    /// repository is empty.
    pub fn from_segments<S: AsRef<str>>(
        segments: &[S],
        expected_host: &str,
    ) -> Result<Self, PathError> {
        let [host, owner, repository] = segments else {
            return Err(PathError::IncorrectLength);
        };

        if !host.as_ref().eq_ignore_ascii_case(expected_host) {
            return Err(PathError::UnexpectedHost);
        }

        Ok(Self {
            owner: RepositoryOwner::new(owner.as_ref())?,
            repository: RepositoryName::new(repository.as_ref())?,
        })
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }
}

/// Base URL of the GitHub REST API that lookups are issued against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase(Url);

impl ApiBase {
    /// Parses an API base such as `https://api.github.com`.
    ///
    /// # Errors
    ///
    /// Returns the parser error when `input` is not an absolute URL.
    pub fn parse(input: &str) -> Result<Self, url::ParseError> {
        Url::parse(input).map(Self)
    }

    /// Borrow the underlying URL.
    #[must_use]
    pub const fn as_url(&self) -> &Url {
        &self.0
    }

    /// `GET /users/<owner>`.
    pub(crate) fn user_url(&self, owner: &RepositoryOwner) -> Result<Url, LookupError> {
        self.endpoint(&["users", owner.as_str()])
    }

    /// `GET /repos/<owner>/<repo>/languages`.
    pub(crate) fn languages_url(&self, locator: &ProjectLocator) -> Result<Url, LookupError> {
        self.endpoint(&[
            "repos",
            locator.owner().as_str(),
            locator.repository().as_str(),
            "languages",
        ])
    }

    /// `GET /repos/<owner>/<repo>/contributors`.
    pub(crate) fn contributors_url(&self, locator: &ProjectLocator) -> Result<Url, LookupError> {
        self.endpoint(&[
            "repos",
            locator.owner().as_str(),
            locator.repository().as_str(),
            "contributors",
        ])
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, LookupError> {
        let mut url = self.0.clone();
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                LookupError::InvalidUrl(format!("{base} cannot be a base URL", base = self.0))
            })?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }
}
