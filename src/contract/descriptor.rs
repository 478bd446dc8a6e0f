//! Contract method descriptor table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::{ValidationError, WalletError, WalletResult};

/// Primitive kind a contract argument must have.
///
/// `Object` matches JSON objects, arrays and `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgKind {
    #[serde(alias = "int", alias = "float")]
    Number,
    #[serde(alias = "str")]
    String,
    #[serde(alias = "bool")]
    Boolean,
    #[serde(alias = "dict", alias = "list", alias = "array")]
    Object,
}

impl std::fmt::Display for ArgKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ArgKind::Number => "number",
            ArgKind::String => "string",
            ArgKind::Boolean => "boolean",
            ArgKind::Object => "object",
        };
        f.write_str(name)
    }
}

/// One declared parameter of a contract method.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ParamDescriptor {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ArgKind,
}

impl ParamDescriptor {
    pub fn new(name: impl Into<String>, kind: ArgKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// `{contract address → {method name → [parameter]}}`, supplied externally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct MethodTable {
    contracts: HashMap<String, HashMap<String, Vec<ParamDescriptor>>>,
}

impl MethodTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from JSON text.
    pub fn from_json(text: &str) -> WalletResult<Self> {
        serde_json::from_str(text)
            .map_err(|e| WalletError::Config(format!("invalid contract descriptor table: {e}")))
    }

    /// Load a table from a JSON file.
    pub fn load_from_file(path: &Path) -> WalletResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            WalletError::Config(format!(
                "cannot read contract descriptors {}: {e}",
                path.display()
            ))
        })?;
        let table = Self::from_json(&text)?;
        tracing::debug!(
            path = %path.display(),
            contracts = table.contracts.len(),
            "Loaded contract descriptors"
        );
        Ok(table)
    }

    /// Declare or replace a method's parameters.
    pub fn insert(
        &mut self,
        contract: impl Into<String>,
        method: impl Into<String>,
        params: Vec<ParamDescriptor>,
    ) {
        self.contracts
            .entry(contract.into())
            .or_default()
            .insert(method.into(), params);
    }

    /// Parameters of `method` on `contract`.
    pub fn params(&self, contract: &str, method: &str) -> Result<&[ParamDescriptor], ValidationError> {
        let methods = self
            .contracts
            .get(contract)
            .ok_or_else(|| ValidationError::UnknownContract(contract.to_string()))?;
        methods
            .get(method)
            .map(Vec::as_slice)
            .ok_or_else(|| ValidationError::UnknownMethod {
                contract: contract.to_string(),
                method: method.to_string(),
            })
    }

    /// Sorted method names of `contract`.
    pub fn methods(&self, contract: &str) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .contracts
            .get(contract)
            .map(|m| m.keys().map(String::as_str).collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }
}
