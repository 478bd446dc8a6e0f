//! Contract invocation with typed argument checks.

use serde_json::Value;
use std::sync::Arc;

use crate::api::ContractCallBody;
use crate::context::WalletContext;
use crate::contract::args::{ArgError, ContractArg};
use crate::contract::descriptor::{MethodTable, ParamDescriptor};
use crate::error::{ValidationError, WalletResult};
use crate::render::render;
use crate::ui::panels;

/// Validates arguments against a [`MethodTable`] and submits contract calls.
#[derive(Debug)]
pub struct ContractCallComposer {
    ctx: Arc<WalletContext>,
    methods: MethodTable,
}

impl ContractCallComposer {
    pub fn new(ctx: Arc<WalletContext>, methods: MethodTable) -> Self {
        Self { ctx, methods }
    }

    pub fn methods(&self) -> &MethodTable {
        &self.methods
    }

    /// Parse every raw argument against the method's descriptors.
    ///
    /// Stops at the first failing argument; nothing is sent.
    pub fn prepare<S: AsRef<str>>(
        &self,
        contract_address: &str,
        method_name: &str,
        raw_args: &[S],
    ) -> WalletResult<Vec<ContractArg>> {
        let params = self
            .methods
            .params(contract_address, method_name)
            .map_err(|e| self.ctx.fail(e))?;
        check_args(params, raw_args).map_err(|e| self.ctx.fail(e))
    }

    /// Validate, then POST the call. The result is rendered inline.
    pub async fn submit<S: AsRef<str>>(
        &self,
        contract_address: &str,
        method_name: &str,
        raw_args: &[S],
    ) -> WalletResult<Value> {
        let args = self.prepare(contract_address, method_name, raw_args)?;
        let creds = self.ctx.require_login("contract call")?;

        let body = ContractCallBody {
            c_address: contract_address.to_string(),
            c_method: method_name.to_string(),
            c_args: args.into_iter().map(ContractArg::into_value).collect(),
        };
        let result = self
            .ctx
            .client
            .contract_transfer(&creds, &body)
            .await
            .map_err(|e| self.ctx.fail(e))?;

        self.ctx.display.set(
            panels::CONTRACT_RESULT,
            render(&result, self.ctx.indent_width(), ""),
        );
        tracing::info!(
            contract = %contract_address,
            method = %method_name,
            args = body.c_args.len(),
            "Contract call accepted"
        );
        self.ctx
            .notices
            .notice(format!("contract call {method_name} accepted"));
        Ok(result)
    }
}

fn check_args<S: AsRef<str>>(
    params: &[ParamDescriptor],
    raw_args: &[S],
) -> Result<Vec<ContractArg>, ValidationError> {
    if params.len() != raw_args.len() {
        return Err(ValidationError::ArgumentCount {
            expected: params.len(),
            actual: raw_args.len(),
        });
    }
    params
        .iter()
        .zip(raw_args)
        .enumerate()
        .map(|(i, (param, raw))| {
            ContractArg::parse(param.kind, raw.as_ref()).map_err(|e| match e {
                ArgError::Json => ValidationError::ArgumentJson(i),
                ArgError::Type => ValidationError::ArgumentType(i),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::descriptor::ArgKind;

    fn params() -> Vec<ParamDescriptor> {
        vec![
            ParamDescriptor::new("to", ArgKind::String),
            ParamDescriptor::new("amount", ArgKind::Number),
        ]
    }

    #[test]
    fn test_check_args_ok() {
        let args = check_args(&params(), &["\"NC1\"", "5"]).unwrap();
        assert_eq!(args.len(), 2);
        assert_eq!(args[1].kind(), ArgKind::Number);
    }

    #[test]
    fn test_check_args_targets_failing_index() {
        assert_eq!(
            check_args(&params(), &["\"NC1\"", "five"]),
            Err(ValidationError::ArgumentJson(1))
        );
        assert_eq!(
            check_args(&params(), &["1", "5"]),
            Err(ValidationError::ArgumentType(0))
        );
    }

    #[test]
    fn test_check_args_count() {
        assert_eq!(
            check_args(&params(), &["\"NC1\""]),
            Err(ValidationError::ArgumentCount {
                expected: 2,
                actual: 1
            })
        );
    }
}
