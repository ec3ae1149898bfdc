//! HTTP Basic authorization for bulk deletion.
//!
//! A single shared credential pair, injected at startup. Not a user system.

use asides_core::Credentials;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use thiserror::Error;

/// Why a request failed the gate. Each variant has its own HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No credentials supplied (401 with a challenge).
    #[error("authorization required")]
    Missing,
    /// Credentials present but not a decodable Basic pair (400).
    #[error("malformed authorization header")]
    Malformed,
    /// Well-formed credentials that do not match (403).
    #[error("forbidden")]
    Forbidden,
}

/// Proof that a request passed [`AuthGate::check`]. Only the gate can mint one.
#[derive(Debug)]
pub struct Authorized(());

#[derive(Debug, Clone)]
pub struct AuthGate {
    credentials: Credentials,
}

impl AuthGate {
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Checks the raw `Authorization` header value, if any.
    pub fn check(&self, header: Option<&str>) -> Result<Authorized, AuthError> {
        let header = match header.map(str::trim) {
            None | Some("") => return Err(AuthError::Missing),
            Some(h) => h,
        };

        let (scheme, encoded) = header.split_once(' ').ok_or(AuthError::Malformed)?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return Err(AuthError::Malformed);
        }

        let decoded = STANDARD.decode(encoded.trim()).map_err(|_| AuthError::Malformed)?;
        let decoded = String::from_utf8(decoded).map_err(|_| AuthError::Malformed)?;
        let (username, password) = decoded.split_once(':').ok_or(AuthError::Malformed)?;

        if self.credentials.matches(username, password) {
            Ok(Authorized(()))
        } else {
            tracing::warn!(username, "rejected credentials for bulk delete");
            Err(AuthError::Forbidden)
        }
    }
}
