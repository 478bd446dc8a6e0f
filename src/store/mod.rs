//! Client-side persistence.
//!
//! # Data Flow
//! ```text
//! SessionManager
//!     → credentials.rs (two fixed keys: username, password)
//!     → kv.rs (KeyValueStore: memory or JSON file on disk)
//! ```
//!
//! Values are stored as plain text. Nothing but the credential pair is
//! persisted.

pub mod credentials;
pub mod kv;

pub use credentials::{CredentialStore, PASSWORD_KEY, USERNAME_KEY};
pub use kv::{FileStore, KeyValueStore, MemoryStore, StoreError};
