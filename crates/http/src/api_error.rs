//! Typed API error for HTTP handlers.
//!
//! Converts service and authorization failures into plain-text responses
//! with the status codes clients of the asides API expect.

use axum::http::header::WWW_AUTHENTICATE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use asides_core::AUTH_REALM;
use asides_service::{AuthError, ServiceError};

pub const ASIDE_NOT_FOUND: &str = "Aside not found\n";

/// API error with HTTP status code and plain-text message.
///
/// `Internal` logs the real error server-side and returns a static message
/// to the client.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: malformed input or credentials.
    BadRequest(String),
    /// 401 Unauthorized: no credentials; carries a Basic challenge.
    Unauthorized,
    /// 403 Forbidden: credentials did not match.
    Forbidden,
    /// 404 Not Found: no aside with that id.
    NotFound,
    /// 412 Precondition Failed: duplicate or blank body.
    PreconditionFailed(String),
    /// 500 Internal Server Error: unexpected failure. Details logged, not exposed.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                [(WWW_AUTHENTICATE, format!(r#"Basic realm="{AUTH_REALM}""#))],
                "Authorization Required",
            )
                .into_response(),
            Self::Forbidden => (StatusCode::FORBIDDEN, "Forbidden").into_response(),
            Self::NotFound => (StatusCode::NOT_FOUND, ASIDE_NOT_FOUND).into_response(),
            Self::PreconditionFailed(msg) => {
                (StatusCode::PRECONDITION_FAILED, msg).into_response()
            },
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error\n").into_response()
            },
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(_) => Self::NotFound,
            ServiceError::DuplicateBody => {
                Self::PreconditionFailed("Error: Duplicate body\n".to_owned())
            },
            ServiceError::InvalidInput(msg) => Self::PreconditionFailed(format!("Error: {msg}\n")),
            ServiceError::Storage(_) => Self::Internal(err.into()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Missing => Self::Unauthorized,
            AuthError::Malformed => Self::BadRequest("Bad Request".to_owned()),
            AuthError::Forbidden => Self::Forbidden,
        }
    }
}
