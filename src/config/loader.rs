//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::WalletConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding `node.base_url`.
pub const NODE_URL_ENV_VAR: &str = "WALLET_NODE_URL";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load, override from the environment, and validate a TOML config file.
pub fn load_config(path: &Path) -> Result<WalletConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let mut config = parse_config(&content)?;
    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Defaults plus environment overrides, validated. Used when no file is given.
pub fn default_config() -> Result<WalletConfig, ConfigError> {
    let mut config = WalletConfig::default();
    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Parse TOML text without touching the environment.
pub fn parse_config(content: &str) -> Result<WalletConfig, ConfigError> {
    toml::from_str(content).map_err(ConfigError::Parse)
}

/// Point `config` at `url` (e.g. from the command line) and re-validate.
///
/// On error `config` is left unchanged.
pub fn override_node_url(config: &mut WalletConfig, url: &str) -> Result<(), ConfigError> {
    let mut candidate = config.clone();
    candidate.node.base_url = url.trim().to_string();
    validate_config(&candidate).map_err(ConfigError::Validation)?;
    *config = candidate;
    Ok(())
}

fn apply_env_overrides(config: &mut WalletConfig) {
    if let Ok(url) = std::env::var(NODE_URL_ENV_VAR) {
        if !url.trim().is_empty() {
            tracing::debug!(url = %url, "Node URL overridden from environment");
            config.node.base_url = url.trim().to_string();
        }
    }
}
