//! Session value types.

use serde::{Deserialize, Serialize};

/// Authentication state of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// Not authenticated (initial state).
    #[default]
    Guest,
    /// The last authentication call succeeded.
    Login,
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionStatus::Guest => f.write_str("guest"),
            SessionStatus::Login => f.write_str("login"),
        }
    }
}

/// Basic-auth credentials for the node's private API.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Never print the password.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// In-memory session. Only the credential pair is ever persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub credentials: Credentials,
    pub status: SessionStatus,
}

impl Session {
    /// Fresh guest session.
    pub fn guest() -> Self {
        Self::default()
    }

    /// Guest session holding credentials that are not yet verified.
    pub fn pending(credentials: Credentials) -> Self {
        Self {
            credentials,
            status: SessionStatus::Guest,
        }
    }

    /// Session after a successful authentication call.
    pub fn logged_in(credentials: Credentials) -> Self {
        Self {
            credentials,
            status: SessionStatus::Login,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.status == SessionStatus::Login
    }
}
