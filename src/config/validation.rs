//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the node URL is an absolute http(s) URL
//! - Validate value ranges (widths, limits, intervals > 0)
//!
//! Returns every problem found, not just the first.

use url::Url;

use crate::config::schema::WalletConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check a parsed configuration.
pub fn validate_config(config: &WalletConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.node.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError {
            field: "node.base_url",
            message: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError {
            field: "node.base_url",
            message: e.to_string(),
        }),
    }

    if config.node.request_timeout_secs == Some(0) {
        errors.push(positive("node.request_timeout_secs"));
    }
    if config.render.indent_width == 0 {
        errors.push(positive("render.indent_width"));
    }
    if config.chain.mining_entries == 0 {
        errors.push(positive("chain.mining_entries"));
    }
    if config.chain.poll_interval_secs == 0 {
        errors.push(positive("chain.poll_interval_secs"));
    }
    if config.account.balance_limit == 0 {
        errors.push(positive("account.balance_limit"));
    }
    if config.account.history_limit == 0 {
        errors.push(positive("account.history_limit"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn positive(field: &'static str) -> ValidationError {
    ValidationError {
        field,
        message: "must be greater than zero".to_string(),
    }
}
