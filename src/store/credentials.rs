//! Persisted username/password pair.

use std::sync::Arc;

use crate::session::Credentials;
use crate::store::kv::{KeyValueStore, StoreError};

/// Storage key for the username.
pub const USERNAME_KEY: &str = "mywallet-username";

/// Storage key for the password.
pub const PASSWORD_KEY: &str = "mywallet-password";

/// Create/read/delete wrapper over a [`KeyValueStore`] for the login pair.
#[derive(Clone)]
pub struct CredentialStore {
    backend: Arc<dyn KeyValueStore>,
}

impl CredentialStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Persist both fields.
    pub fn save(&self, username: &str, password: &str) -> Result<(), StoreError> {
        self.backend.set(USERNAME_KEY, username)?;
        self.backend.set(PASSWORD_KEY, password)?;
        Ok(())
    }

    /// Delete both fields.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.backend.remove(USERNAME_KEY)?;
        self.backend.remove(PASSWORD_KEY)?;
        Ok(())
    }

    /// Return the stored pair, or `None` when no username is stored.
    ///
    /// The values are not checked against the node here.
    pub fn try_restore(&self) -> Option<Credentials> {
        let username = self.backend.get(USERNAME_KEY)?;
        let password = self.backend.get(PASSWORD_KEY).unwrap_or_default();
        Some(Credentials::new(username, password))
    }
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore")
            .field("has_username", &self.backend.get(USERNAME_KEY).is_some())
            .finish()
    }
}
