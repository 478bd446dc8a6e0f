//! Wallet node API subsystem.
//!
//! # Data Flow
//! ```text
//! config.node (base URL, optional timeout)
//!     → client.rs (reqwest, basic auth on /private/*)
//!     → types.rs (request bodies, ApiError)
//!     → serde_json::Value handed to the dashboard components
//! ```
//!
//! Responses are returned verbatim; only the components decide which
//! fields to look at.

pub mod client;
pub mod types;

pub use client::NodeClient;
pub use types::{endpoints, ApiError, ApiResult, ContractCallBody, PageQuery, SendManyBody};
