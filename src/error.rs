//! Error taxonomy shared by every dashboard operation.
//!
//! Remote failures keep the node's message verbatim so it can be shown
//! to the user as-is.

use thiserror::Error;

use crate::api::ApiError;
use crate::store::StoreError;

/// Client-side input check failures. Raised before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("recipient address is empty")]
    EmptyAddress,

    #[error("coin id is not an integer: {0:?}")]
    InvalidCoinId(String),

    #[error("amount is not a number: {0:?}")]
    InvalidAmount(String),

    #[error("message is not valid hex")]
    InvalidHexMessage,

    #[error("sender account is not set")]
    MissingSender,

    #[error("unknown contract {0}")]
    UnknownContract(String),

    #[error("contract {contract} has no method {method}")]
    UnknownMethod { contract: String, method: String },

    #[error("method expects {expected} arguments, got {actual}")]
    ArgumentCount { expected: usize, actual: usize },

    #[error("Please check JSON format of argument {0}")]
    ArgumentJson(usize),

    #[error("Please check type format of argument {0}")]
    ArgumentType(usize),
}

/// Errors surfaced by dashboard operations.
#[derive(Debug, Error)]
pub enum WalletError {
    /// Request rejected by the node or the node is unreachable.
    #[error("{0}")]
    Network(String),

    /// The node rejected the credentials.
    #[error("{0}")]
    Auth(String),

    /// Local input check failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Action attempted in the wrong session state.
    #[error("{0}")]
    State(String),

    /// Credential store could not be read or written.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Invalid configuration or external descriptor table.
    #[error("{0}")]
    Config(String),
}

impl From<ApiError> for WalletError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized(message) => WalletError::Auth(message),
            other => WalletError::Network(other.to_string()),
        }
    }
}

/// Result type for dashboard operations.
pub type WalletResult<T> = Result<T, WalletError>;
