//! Typed contract calls against a mock wallet node.

mod common;

use serde_json::json;

use common::{context_for, logged_in_context, MockNode};
use wallet_dashboard::contract::{ArgKind, ContractCallComposer, MethodTable, ParamDescriptor};
use wallet_dashboard::ui::panels;
use wallet_dashboard::{ValidationError, WalletError};

fn table() -> MethodTable {
    let mut table = MethodTable::new();
    table.insert(
        "CADDR",
        "transfer",
        vec![
            ParamDescriptor::new("to", ArgKind::String),
            ParamDescriptor::new("amount", ArgKind::Number),
            ParamDescriptor::new("memo", ArgKind::Object),
        ],
    );
    table
}

#[tokio::test]
async fn test_valid_call_posts_typed_args() {
    let (node, url) = MockNode::start().await;
    let (ctx, _store) = logged_in_context(&url).await;
    let composer = ContractCallComposer::new(ctx.clone(), table());

    let result = composer
        .submit("CADDR", "transfer", &["\"NCADDR\"", "100", "{\"note\": [1, 2]}"])
        .await
        .unwrap();
    assert_eq!(result["hash"], "cc11");

    let requests = node.requests_to("/private/contracttransfer");
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].json_body(),
        json!({
            "c_address": "CADDR",
            "c_method": "transfer",
            "c_args": ["NCADDR", 100, {"note": [1, 2]}]
        })
    );

    assert!(ctx.display.get(panels::CONTRACT_RESULT).unwrap().contains("cc11"));
    assert_eq!(
        ctx.notices.current().unwrap().to_string(),
        "Notice: contract call transfer accepted"
    );
}

#[tokio::test]
async fn test_type_mismatch_makes_no_request() {
    let (node, url) = MockNode::start().await;
    let (ctx, _store) = logged_in_context(&url).await;
    ctx.display.set(panels::CONTRACT_RESULT, "previous result\n");
    let before = node.requests().len();
    let composer = ContractCallComposer::new(ctx.clone(), table());

    let err = composer
        .submit("CADDR", "transfer", &["\"NCADDR\"", "\"100\"", "null"])
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        WalletError::Validation(ValidationError::ArgumentType(1))
    ));
    assert_eq!(node.requests().len(), before);
    assert_eq!(
        ctx.display.get(panels::CONTRACT_RESULT).as_deref(),
        Some("previous result\n")
    );
    assert_eq!(
        ctx.notices.current().unwrap().to_string(),
        "Error! Please check type format of argument 1"
    );
}

#[tokio::test]
async fn test_bad_json_names_argument() {
    let (node, url) = MockNode::start().await;
    let (ctx, _store) = logged_in_context(&url).await;
    let before = node.requests().len();
    let composer = ContractCallComposer::new(ctx.clone(), table());

    let err = composer
        .submit("CADDR", "transfer", &["NCADDR", "100", "{}"])
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Please check JSON format of argument 0");
    assert_eq!(node.requests().len(), before);
}

#[tokio::test]
async fn test_unknown_method_rejected_locally() {
    let (node, url) = MockNode::start().await;
    let (ctx, _store) = logged_in_context(&url).await;
    let before = node.requests().len();
    let composer = ContractCallComposer::new(ctx, table());

    let err = composer
        .submit("CADDR", "mint", &[] as &[&str])
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        WalletError::Validation(ValidationError::UnknownMethod { .. })
    ));
    assert_eq!(node.requests().len(), before);
}

#[tokio::test]
async fn test_guest_call_validates_then_stops() {
    let (node, url) = MockNode::start().await;
    let (ctx, _store) = context_for(&url);
    let composer = ContractCallComposer::new(ctx, table());

    let err = composer
        .submit("CADDR", "transfer", &["\"NCADDR\"", "1", "[]"])
        .await
        .unwrap_err();

    assert!(matches!(err, WalletError::State(_)));
    assert!(node.requests().is_empty());
}

#[tokio::test]
async fn test_node_rejection_surfaced() {
    let (node, url) = MockNode::start().await;
    node.respond("/private/contracttransfer", 400, "contract is paused");
    let (ctx, _store) = logged_in_context(&url).await;
    let composer = ContractCallComposer::new(ctx.clone(), table());

    let err = composer
        .submit("CADDR", "transfer", &["\"NCADDR\"", "1", "{}"])
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "contract is paused");
    assert!(ctx.display.get(panels::CONTRACT_RESULT).is_none());
}
