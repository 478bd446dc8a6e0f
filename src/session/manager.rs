//! Login, logout and startup restore.

use serde_json::Value;
use std::sync::Arc;

use crate::context::WalletContext;
use crate::error::WalletResult;
use crate::render::scalar_text;
use crate::session::state::{Credentials, Session};

/// Owns the session lifecycle of a [`WalletContext`].
#[derive(Debug, Clone)]
pub struct SessionManager {
    ctx: Arc<WalletContext>,
}

impl SessionManager {
    pub fn new(ctx: Arc<WalletContext>) -> Self {
        Self { ctx }
    }

    /// Authenticate against the node's system-info endpoint.
    ///
    /// On success the session becomes `login` and the pair is saved. On
    /// failure the session drops to `guest`, the stored pair is left as it
    /// was and the node's message is surfaced.
    pub async fn login(&self, username: &str, password: &str) -> WalletResult<Value> {
        let creds = Credentials::new(username, password);
        let checked = self.ctx.client.system_info(&creds).await;
        let info = match checked {
            Ok(info) => info,
            Err(e) => {
                self.ctx.set_session(Session::pending(creds));
                return Err(self.ctx.fail(e));
            }
        };

        self.ctx.set_session(Session::logged_in(creds));
        if let Err(e) = self.ctx.credentials.save(username, password) {
            tracing::warn!(error = %e, "Could not persist credentials");
        }

        let version = info
            .get("system_ver")
            .map(scalar_text)
            .unwrap_or_default();
        tracing::info!(username = %username, system_ver = %version, "Logged in");
        self.ctx.notices.notice(format!("login success! {version}"));
        Ok(info)
    }

    /// Drop the session locally. Never contacts the node.
    pub fn logout(&self) {
        self.ctx.set_session(Session::guest());
        if let Err(e) = self.ctx.credentials.clear() {
            tracing::warn!(error = %e, "Could not clear stored credentials");
        }
        tracing::info!("Logged out");
        self.ctx.notices.notice("logout now.");
    }

    /// Re-authenticate with a stored pair, if there is one.
    ///
    /// Returns `Ok(None)` without any request when nothing is stored. A
    /// stale pair is still tried and rejected by the node.
    pub async fn restore_on_startup(&self) -> WalletResult<Option<Value>> {
        let Some(creds) = self.ctx.credentials.try_restore() else {
            tracing::debug!("No stored credentials");
            return Ok(None);
        };

        tracing::debug!(username = %creds.username, "Restoring stored credentials");
        self.login(&creds.username, &creds.password).await.map(Some)
    }

    /// Current session snapshot.
    pub fn session(&self) -> Arc<Session> {
        self.ctx.session()
    }
}
