//! The single shared credential pair guarding bulk deletion.

use crate::constants::{DEFAULT_PASSWORD, DEFAULT_USERNAME};

/// Static username/password pair, passed explicitly to whoever needs it.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(DEFAULT_USERNAME, DEFAULT_PASSWORD)
    }
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }

    /// Reads `ASIDES_USERNAME` / `ASIDES_PASSWORD`, falling back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let username =
            std::env::var("ASIDES_USERNAME").unwrap_or_else(|_| DEFAULT_USERNAME.to_owned());
        let password =
            std::env::var("ASIDES_PASSWORD").unwrap_or_else(|_| DEFAULT_PASSWORD.to_owned());
        Self { username, password }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}
