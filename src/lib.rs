//! Wallet node dashboard library.
//!
//! Client-side control layer for a wallet node's REST API: login session,
//! chain and account polling, multi-recipient transfers, contract calls,
//! and text rendering of nested responses.
//!
//! # Architecture Overview
//!
//! ```text
//!  ┌──────────────────────────── WalletContext ────────────────────────────┐
//!  │ config · NodeClient · Session (ArcSwap) · CredentialStore             │
//!  │ NoticeBoard · DisplayBoard · AccountRegistry                          │
//!  └───────▲──────────▲─────────────▲──────────────▲──────────────▲────────┘
//!          │          │             │              │              │
//!   SessionManager ChainInfoPoller AccountSync  Transaction   ContractCall
//!                                  Service      Composer      Composer
//!                         │             │              │              │
//!                         └──── render (HierarchicalRenderer) ────────┘
//! ```

pub mod account;
pub mod api;
pub mod chain;
pub mod config;
pub mod context;
pub mod contract;
pub mod error;
pub mod observability;
pub mod render;
pub mod send;
pub mod session;
pub mod store;
pub mod ui;

pub use config::WalletConfig;
pub use context::WalletContext;
pub use error::{ValidationError, WalletError, WalletResult};
