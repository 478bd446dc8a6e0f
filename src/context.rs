//! Explicit application context shared by the dashboard components.
//!
//! Every component receives an `Arc<WalletContext>` at construction and
//! reaches shared state only through it: the node client, the session
//! cell, the credential store, the output boards and the account registry.

use arc_swap::ArcSwap;
use std::sync::Arc;

use crate::account::AccountRegistry;
use crate::api::NodeClient;
use crate::config::WalletConfig;
use crate::error::{WalletError, WalletResult};
use crate::session::{Credentials, Session};
use crate::store::{CredentialStore, KeyValueStore};
use crate::ui::{DisplayBoard, NoticeBoard};

/// Shared state of one dashboard instance.
pub struct WalletContext {
    pub config: WalletConfig,
    pub client: NodeClient,
    pub credentials: CredentialStore,
    pub notices: NoticeBoard,
    pub display: DisplayBoard,
    pub accounts: AccountRegistry,
    session: ArcSwap<Session>,
}

impl WalletContext {
    /// Build a context in the `guest` state.
    pub fn new(config: WalletConfig, store: Arc<dyn KeyValueStore>) -> WalletResult<Self> {
        let client = NodeClient::new(&config.node).map_err(|e| WalletError::Config(e.to_string()))?;
        Ok(Self {
            config,
            client,
            credentials: CredentialStore::new(store),
            notices: NoticeBoard::new(),
            display: DisplayBoard::new(),
            accounts: AccountRegistry::new(),
            session: ArcSwap::from_pointee(Session::guest()),
        })
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Arc<Session> {
        self.session.load_full()
    }

    pub(crate) fn set_session(&self, session: Session) {
        self.session.store(Arc::new(session));
    }

    /// Key column width for rendered panels.
    pub fn indent_width(&self) -> usize {
        self.config.render.indent_width
    }

    /// Hard guard for private operations.
    ///
    /// Returns the session credentials when logged in. Otherwise publishes
    /// an error notice and fails before any request is made.
    pub fn require_login(&self, action: &str) -> WalletResult<Credentials> {
        let session = self.session();
        if session.is_logged_in() {
            Ok(session.credentials.clone())
        } else {
            Err(self.fail(WalletError::State(format!("please login first ({action})"))))
        }
    }

    /// Publish `err` on the notice board and hand it back for propagation.
    pub fn fail(&self, err: impl Into<WalletError>) -> WalletError {
        let err = err.into();
        self.notices.error(err.to_string());
        err
    }
}

impl std::fmt::Debug for WalletContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletContext")
            .field("client", &self.client)
            .field("session", &self.session())
            .finish()
    }
}
