//! Error types exposed by the GitHub lookup layer.

use thiserror::Error;

/// Reasons a request path is rejected before any upstream call is made.
///
/// The `Display` output doubles as the plain-text body returned to the
/// caller.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PathError {
    /// The path did not contain exactly `<host>/<owner>/<repo>`.
    #[error("Incorrect path length")]
    IncorrectLength,

    /// The first segment did not name the expected host.
    #[error("Not a github link")]
    UnexpectedHost,

    /// The owner or repository segment was empty.
    #[error("Missing owner or repository")]
    MissingSegment,
}

/// Reasons a single upstream lookup could not produce its field.
///
/// These never fail a request; the aggregator swaps in a placeholder and
/// logs the reason.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    /// The lookup URL could not be built from the configured API base.
    #[error("invalid lookup URL: {0}")]
    InvalidUrl(String),

    /// Transport failed, including the request timing out.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The response carried no body at all.
    #[error("GitHub returned an empty body")]
    EmptyBody,

    /// The body could not be read in full.
    #[error("failed to read response body: {message}")]
    Body {
        /// Error detail from the body stream.
        message: String,
    },

    /// The body was not the JSON shape the lookup expects.
    #[error("unexpected response payload: {message}")]
    Decode {
        /// Error detail from the JSON decoder.
        message: String,
    },

    /// GitHub reported that the account does not exist.
    #[error("GitHub reported the resource as not found: {message}")]
    NotFound {
        /// Message returned in the error envelope.
        message: String,
    },

    /// GitHub answered with an error envelope instead of data.
    #[error("GitHub API error: {message}")]
    ErrorEnvelope {
        /// Message returned in the error envelope.
        message: String,
    },

    /// The repository reported no languages.
    #[error("repository has no languages")]
    NoLanguages,
}
