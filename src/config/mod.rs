//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, WALLET_NODE_URL override)
//!     → validation.rs (semantic checks)
//!     → WalletConfig (validated, immutable)
//!     → owned by WalletContext, read by every component
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{default_config, load_config, override_node_url, ConfigError};
pub use schema::{
    AccountConfig, ChainConfig, ContractsConfig, NodeConfig, ObservabilityConfig, RenderConfig,
    StoreConfig, WalletConfig,
};
