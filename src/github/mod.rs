//! GitHub project lookups and their aggregation.
//!
//! This module validates `<host>/<owner>/<repo>` paths, fetches the owner,
//! language and contributor endpoints of the GitHub REST API, and folds the
//! results into a [`RepositoryInfo`]. Each lookup fails on its own: a failed
//! field is replaced by a placeholder instead of failing the whole summary.

pub mod client;
pub mod error;
pub mod intake;
pub mod locator;
pub mod models;
pub mod resolvers;

pub use client::{HttpUpstreamClient, UpstreamClient};
pub use error::{LookupError, PathError};
pub use intake::{ProjectInfoIntake, aggregate};
pub use locator::{ApiBase, ProjectLocator, RepositoryName, RepositoryOwner};
pub use models::{
    AccountKind, CONTRIBUTORS_PLACEHOLDER, CommitTally, ContributorRecord, LANGUAGES_PLACEHOLDER,
    OWNER_PLACEHOLDER, RepositoryInfo, UserIdentity,
};

#[cfg(test)]
pub use client::MockUpstreamClient;
