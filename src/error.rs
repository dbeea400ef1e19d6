//! Process-level errors raised while starting or running the service.

use thiserror::Error;

/// Errors that stop the service from starting or serving.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No listen port was configured.
    #[error("listen port is required (use --port, PROJECTINFO_PORT, or PORT)")]
    MissingPort,

    /// The configured listen port is not a valid port number.
    #[error("listen port is invalid: {value}")]
    InvalidPort {
        /// The rejected value.
        value: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The configured upstream API base is not a usable URL.
    #[error("API base URL is invalid: {0}")]
    InvalidUrl(String),

    /// The upstream HTTP client could not be constructed.
    #[error("failed to configure HTTP client: {message}")]
    HttpClient {
        /// Error detail from the client builder.
        message: String,
    },

    /// The tracing subscriber could not be installed.
    #[error("logging setup failed: {message}")]
    Logging {
        /// Error detail from the subscriber.
        message: String,
    },

    /// Binding or serving the listener failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl From<std::io::Error> for ServiceError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(error: reqwest::Error) -> Self {
        Self::HttpClient {
            message: error.to_string(),
        }
    }
}
