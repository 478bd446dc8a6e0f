//! Login session lifecycle.
//!
//! # States
//! ```text
//! guest ──login ok──▶ login ──logout──▶ guest
//!   │                   ▲
//!   └─restore_on_startup┘  (stored pair, re-authenticated)
//! ```
//!
//! A failed login leaves both the session and the credential store as
//! they were.

pub mod manager;
pub mod state;

pub use manager::SessionManager;
pub use state::{Credentials, Session, SessionStatus};
