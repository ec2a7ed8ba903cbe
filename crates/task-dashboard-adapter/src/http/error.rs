/*
[INPUT]:  Error sources (HTTP transport, status codes, serialization, URLs)
[OUTPUT]: Structured error type for the adapter crate
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the task dashboard adapter
#[derive(Error, Debug)]
pub enum DashboardError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("server returned {code}: {body}")]
    Status { code: u16, body: String },

    /// Response body was not valid JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DashboardError {
    /// Create a status error, trimming very long bodies
    pub fn status(status: StatusCode, body: impl Into<String>) -> Self {
        let mut body = body.into();
        if body.len() > MAX_BODY_IN_ERROR {
            let mut cut = MAX_BODY_IN_ERROR;
            while !body.is_char_boundary(cut) {
                cut -= 1;
            }
            body.truncate(cut);
            body.push_str("...");
        }
        DashboardError::Status {
            code: status.as_u16(),
            body,
        }
    }

    /// Status code if the server answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            DashboardError::Status { code, .. } => Some(*code),
            DashboardError::Http(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, DashboardError::Http(err) if err.is_timeout())
    }
}

const MAX_BODY_IN_ERROR: usize = 512;

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, DashboardError>;
