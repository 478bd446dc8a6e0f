//! Typed contract call arguments.

use serde_json::{Number, Value};

use crate::contract::descriptor::ArgKind;

/// Why a raw argument was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgError {
    /// Not valid JSON text.
    Json,
    /// Valid JSON of the wrong kind.
    Type,
}

/// Validity marker for an input field, refreshed as the user types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    Valid,
    Invalid,
}

/// JSON validity of raw field input.
pub fn validate_input(raw: &str) -> FieldState {
    match serde_json::from_str::<Value>(raw) {
        Ok(_) => FieldState::Valid,
        Err(_) => FieldState::Invalid,
    }
}

/// An argument already checked against its declared kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ContractArg {
    Number(Number),
    String(String),
    Boolean(bool),
    /// Object, array or null.
    Object(Value),
}

impl ContractArg {
    /// Parse `raw` as JSON and accept it only if it has kind `kind`.
    pub fn parse(kind: ArgKind, raw: &str) -> Result<Self, ArgError> {
        let value: Value = serde_json::from_str(raw).map_err(|_| ArgError::Json)?;
        match (kind, value) {
            (ArgKind::Number, Value::Number(n)) => Ok(ContractArg::Number(n)),
            (ArgKind::String, Value::String(s)) => Ok(ContractArg::String(s)),
            (ArgKind::Boolean, Value::Bool(b)) => Ok(ContractArg::Boolean(b)),
            (ArgKind::Object, v @ (Value::Object(_) | Value::Array(_) | Value::Null)) => {
                Ok(ContractArg::Object(v))
            }
            _ => Err(ArgError::Type),
        }
    }

    pub fn kind(&self) -> ArgKind {
        match self {
            ContractArg::Number(_) => ArgKind::Number,
            ContractArg::String(_) => ArgKind::String,
            ContractArg::Boolean(_) => ArgKind::Boolean,
            ContractArg::Object(_) => ArgKind::Object,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            ContractArg::Number(n) => Value::Number(n),
            ContractArg::String(s) => Value::String(s),
            ContractArg::Boolean(b) => Value::Bool(b),
            ContractArg::Object(v) => v,
        }
    }
}
