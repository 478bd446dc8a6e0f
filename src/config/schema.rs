//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the dashboard.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::render::DEFAULT_INDENT_WIDTH;

/// Root configuration for the wallet dashboard.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct WalletConfig {
    /// Wallet node connection.
    pub node: NodeConfig,

    /// Credential persistence.
    pub store: StoreConfig,

    /// Text rendering of responses.
    pub render: RenderConfig,

    /// Chain info polling.
    pub chain: ChainConfig,

    /// Balance and history queries.
    pub account: AccountConfig,

    /// Contract method descriptor table.
    pub contracts: ContractsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Wallet node connection settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Base URL of the node REST API (e.g., "http://127.0.0.1:3000").
    pub base_url: String,

    /// Optional per-request timeout in seconds. No timeout when unset.
    pub request_timeout_secs: Option<u64>,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".to_string(),
            request_timeout_secs: None,
        }
    }
}

/// Credential store settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StoreConfig {
    /// JSON file holding the saved credentials. `None` keeps them in memory.
    pub path: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: Some("mywallet-store.json".to_string()),
        }
    }
}

/// Rendering settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Width of the key column and of each nesting step.
    pub indent_width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

/// Chain info settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Number of mining entries shown in the mining panel.
    pub mining_entries: usize,

    /// Poll interval for the watch loop in seconds.
    pub poll_interval_secs: u64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            mining_entries: 15,
            poll_interval_secs: 10,
        }
    }
}

/// Account query settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AccountConfig {
    /// Default minimum confirmation count.
    pub default_confirm: u32,

    /// `limit` sent with balance queries.
    pub balance_limit: u32,

    /// `limit` sent with history queries.
    pub history_limit: u32,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            default_confirm: 6,
            balance_limit: 3,
            history_limit: 25,
        }
    }
}

/// Contract descriptor settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ContractsConfig {
    /// JSON file with the `{address: {method: [descriptor]}}` table.
    pub descriptor_path: Option<String>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
