//! Multi-recipient transfers.
//!
//! # Data Flow
//! ```text
//! form input → add_recipient (trim, parse) → SendRequest draft
//!     → submit: login guard → to_body (sender required)
//!     → POST /private/sendmany → panel "send-result" → reset
//! ```
//!
//! Recipients carry a `RecipientId` assigned at insertion, so removal
//! stays unambiguous when two rows look the same.

pub mod composer;
pub mod recipient;

pub use composer::TransactionComposer;
pub use recipient::{Message, Recipient, RecipientId, SendRequest};
