//! Projectinfo library crate providing a GitHub project summary service.
//!
//! Given `<host>/<owner>/<repo>`, the service asks the GitHub REST API for
//! the owner's display name, the repository languages, and its contributors,
//! then answers with one JSON summary. Each of the three lookups may fail on
//! its own; a failed field is replaced by a placeholder while the request as
//! a whole still succeeds.

pub mod config;
pub mod error;
pub mod github;
pub mod server;
pub mod telemetry;

pub use config::ProjectInfoConfig;
pub use error::ServiceError;
pub use github::{
    ApiBase, HttpUpstreamClient, LookupError, PathError, ProjectInfoIntake, ProjectLocator,
    RepositoryInfo, UpstreamClient,
};
pub use server::{AppState, router, serve};
