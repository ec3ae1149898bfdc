//! Typed error enum for the client crate.

use thiserror::Error;

/// Errors from asides API calls.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl ClientError {
    /// Whether the server refused the write because of a duplicate or blank body.
    #[must_use]
    pub fn is_precondition_failed(&self) -> bool {
        matches!(self, Self::HttpStatus { code: 412, .. })
    }

    /// Whether the server did not know the requested aside.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::HttpStatus { code: 404, .. })
    }

    /// Response body for status errors, as sent by the server.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::HttpStatus { body, .. } => Some(body),
            _ => None,
        }
    }
}
