//! Wire types and error definitions for the wallet node API.

use serde::Serialize;
use serde_json::{Number, Value};
use thiserror::Error;

/// Endpoint paths, relative to the node base URL.
pub mod endpoints {
    pub const CHAIN_INFO: &str = "/public/getchaininfo";
    pub const SYSTEM_INFO: &str = "/private/getsysteminfo";
    pub const LIST_BALANCE: &str = "/private/listbalance";
    pub const LIST_TRANSACTIONS: &str = "/private/listtransactions";
    pub const SEND_MANY: &str = "/private/sendmany";
    pub const CONTRACT_TRANSFER: &str = "/private/contracttransfer";
}

/// Errors that can occur talking to the node.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection failed, timed out, or the request could not be built.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The node rejected the basic-auth credentials (401/403).
    #[error("{0}")]
    Unauthorized(String),

    /// The node answered with a non-success status. `message` is the raw body.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// A success response whose body is not JSON.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL is unusable.
    #[error("invalid node URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Result type for node API calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Query string for the paginated account endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageQuery {
    pub confirm: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl PageQuery {
    /// Unpaginated query, confirm filter only.
    pub fn all(confirm: u32) -> Self {
        Self {
            confirm,
            limit: None,
            page: None,
        }
    }

    pub fn paged(confirm: u32, limit: u32, page: u32) -> Self {
        Self {
            confirm,
            limit: Some(limit),
            page: Some(page),
        }
    }
}

/// Body of `POST /private/sendmany`.
///
/// `pairs` are `[address, coin_id, amount]` triples. At most one of
/// `hex`/`message` is present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendManyBody {
    pub from: String,
    pub pairs: Vec<(String, u32, Number)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Body of `POST /private/contracttransfer`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractCallBody {
    pub c_address: String,
    pub c_method: String,
    pub c_args: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_send_many_body_shape() {
        let body = SendManyBody {
            from: "@Unknown".into(),
            pairs: vec![("NCADDR".into(), 0, Number::from(10))],
            hex: None,
            message: Some("thanks".into()),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"from": "@Unknown", "pairs": [["NCADDR", 0, 10]], "message": "thanks"})
        );
    }

    #[test]
    fn test_contract_body_shape() {
        let body = ContractCallBody {
            c_address: "CADDR".into(),
            c_method: "transfer".into(),
            c_args: vec![json!(1), json!("x")],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"c_address": "CADDR", "c_method": "transfer", "c_args": [1, "x"]})
        );
    }

    #[test]
    fn test_rejected_display_is_raw() {
        let err = ApiError::Rejected {
            status: 400,
            message: "Not found user".into(),
        };
        assert_eq!(err.to_string(), "Not found user");
    }
}
