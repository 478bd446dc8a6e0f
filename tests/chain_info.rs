//! Chain info refresh and polling against a mock wallet node.

mod common;

use std::time::Duration;

use common::{context_for, MockNode};
use wallet_dashboard::chain::ChainInfoPoller;
use wallet_dashboard::ui::panels;

#[tokio::test]
async fn test_refresh_renders_panels_without_login() {
    let (node, url) = MockNode::start().await;
    let (ctx, _store) = context_for(&url);

    let info = ChainInfoPoller::new(ctx.clone()).refresh().await.unwrap();
    assert_eq!(info["best"]["height"], 1024);

    let best = ctx.display.get(panels::BEST_BLOCK).unwrap();
    assert!(best.contains("height"));
    assert!(best.contains("1024"));
    assert!(best.contains("POS"));

    assert_eq!(
        ctx.notices.current().unwrap().to_string(),
        "Notice: update block info 1024"
    );

    let requests = node.requests_to("/public/getchaininfo");
    assert_eq!(requests.len(), 1);
    assert!(requests[0].authorization.is_none());
}

#[tokio::test]
async fn test_mining_panel_is_capped() {
    let (_node, url) = MockNode::start().await;
    let (ctx, _store) = context_for(&url);

    ChainInfoPoller::new(ctx.clone()).refresh().await.unwrap();

    let mining = ctx.display.get(panels::MINING).unwrap();
    assert!(mining.contains("consensus00"));
    assert!(mining.contains("consensus14"));
    assert!(!mining.contains("consensus15"));
}

#[tokio::test]
async fn test_node_error_is_surfaced_verbatim() {
    let (node, url) = MockNode::start().await;
    node.respond("/public/getchaininfo", 500, "Node is booting");
    let (ctx, _store) = context_for(&url);

    let err = ChainInfoPoller::new(ctx.clone()).refresh().await.unwrap_err();
    assert_eq!(err.to_string(), "Node is booting");

    let notice = ctx.notices.current().unwrap();
    assert_eq!(notice.to_string(), "Error! Node is booting");
    assert!(ctx.display.get(panels::BEST_BLOCK).is_none());
}

#[tokio::test]
async fn test_run_polls_until_shutdown() {
    let (node, url) = MockNode::start().await;
    let (ctx, _store) = context_for(&url);
    let poller = ChainInfoPoller::new(ctx.clone());

    let shutdown = tokio::time::sleep(Duration::from_millis(250));
    tokio::time::timeout(
        Duration::from_secs(5),
        poller.run(Duration::from_millis(50), shutdown),
    )
    .await
    .unwrap();

    assert!(node.requests_to("/public/getchaininfo").len() >= 2);
    assert!(ctx.display.get(panels::BEST_BLOCK).is_some());
}
