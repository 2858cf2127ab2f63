//! Error types for bloomia_io crate.
//!
//! Covers the settings file and the scoreboard REST backend.

use thiserror::Error;

fn body_suffix(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!("\n{body}")
    }
}

/// Main error type for bloomia_io operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File system errors
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Transport-level failures (DNS, connect, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status
    #[error("{method} {url} failed: {status}{}", body_suffix(.body))]
    Http {
        method: String,
        url: String,
        /// Status code and reason phrase, e.g. `404 Not Found`.
        status: String,
        body: String,
    },

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not found errors
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<IoError>,
    },
}

/// Result type alias for bloomia_io operations.
pub type Result<T> = std::result::Result<T, IoError>;

impl IoError {
    #[must_use]
    pub fn network<S: Into<String>>(msg: S) -> Self {
        Self::Network(msg.into())
    }

    #[must_use]
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }

    #[must_use]
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound(resource.into())
    }

    /// Creates an HTTP status error.
    #[must_use]
    pub fn http(
        method: impl Into<String>,
        url: impl Into<String>,
        status: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self::Http {
            method: method.into(),
            url: url.into(),
            status: status.into(),
            body: body.into(),
        }
    }

    /// True for failures worth retrying: transport errors, 5xx and 429.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Http { status, .. } => status.starts_with('5') || status.starts_with("429"),
            Self::Context { source, .. } => source.is_transient(),
            _ => false,
        }
    }

    /// Wraps an error with additional context.
    #[must_use]
    pub fn with_context<S: Into<String>>(self, context: S) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }
}
