//! Account balances, history and the shared account registry.
//!
//! # Data Flow
//! ```text
//! refresh_balances(cursor)
//!     → [balances] GET /private/listbalance      → panels "balance/{name}"
//!     → [history]  GET /private/listtransactions → panels "history/{index}"
//!     → next-page control bound to cursor.next()
//!
//! refresh_account_list()
//!     → GET /private/listbalance (no paging) → AccountRegistry (add-only)
//! ```

pub mod registry;
pub mod sync;

pub use registry::AccountRegistry;
pub use sync::{AccountSyncService, PageCursor, SyncReport, SyncStage};
