//! Shared utilities for integration testing: a programmable mock wallet node.

#![allow(dead_code)]

use axum::{
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

use wallet_dashboard::store::MemoryStore;
use wallet_dashboard::{WalletConfig, WalletContext};

pub const USERNAME: &str = "user";
pub const PASSWORD: &str = "password";
/// `Authorization` header for USERNAME:PASSWORD.
pub const BASIC_AUTH: &str = "Basic dXNlcjpwYXNzd29yZA==";

/// One request as seen by the mock node.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: String,
    pub authorization: Option<String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn query_pairs(&self) -> HashMap<String, String> {
        self.query
            .split('&')
            .filter(|p| !p.is_empty())
            .filter_map(|p| p.split_once('='))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    pub fn json_body(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

/// Mock node that records every request and serves canned responses.
///
/// `/private/*` paths require [`BASIC_AUTH`] and answer 401 otherwise.
#[derive(Clone, Default)]
pub struct MockNode {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responses: Arc<Mutex<HashMap<String, (u16, String)>>>,
}

impl MockNode {
    /// Start on an ephemeral port with default responses. Returns the base URL.
    pub async fn start() -> (Self, String) {
        let node = MockNode::default();
        node.install_defaults();

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new().fallback(handle).with_state(node.clone());

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        (node, format!("http://{}", addr))
    }

    /// Serve `body` with `status` for `path`.
    pub fn respond(&self, path: &str, status: u16, body: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, body.into()));
    }

    pub fn respond_json(&self, path: &str, value: Value) {
        self.respond(path, 200, value.to_string());
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }

    fn install_defaults(&self) {
        let mining: serde_json::Map<String, Value> = (0..20)
            .map(|i| (format!("consensus{i:02}"), json!({"diff": i, "bias": 1.0})))
            .collect();

        self.respond_json(
            "/public/getchaininfo",
            json!({
                "best": {"height": 1024, "hash": "00ab", "flag": "POS"},
                "mining": Value::Object(mining),
                "size": 512
            }),
        );
        self.respond_json(
            "/private/getsysteminfo",
            json!({"system_ver": "0.0.30-beta", "api_ver": "0.0.2", "booting": false}),
        );
        self.respond_json(
            "/private/listbalance",
            json!({"@Unknown": {"0": 100}, "alice": {"0": 5, "1": 2}}),
        );
        self.respond_json(
            "/private/listtransactions",
            json!({
                "txs": [
                    {"index": 0, "hash": "aa01", "movement": {"alice": {"0": -5}}},
                    {"index": 1, "hash": "aa02", "movement": {"alice": {"0": 5}}}
                ],
                "next": true
            }),
        );
        self.respond_json(
            "/private/sendmany",
            json!({"hash": "ff00", "gas_amount": 10000, "gas_price": 100, "fee": 1000000}),
        );
        self.respond_json(
            "/private/contracttransfer",
            json!({"hash": "cc11", "gas_amount": 20000}),
        );
    }
}

async fn handle(
    State(node): State<MockNode>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(str::to_string);
    let path = uri.path().to_string();

    node.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: path.clone(),
        query: uri.query().unwrap_or("").to_string(),
        authorization: authorization.clone(),
        body,
    });

    if path.starts_with("/private/") && authorization.as_deref() != Some(BASIC_AUTH) {
        return (StatusCode::UNAUTHORIZED, "Unauthorized").into_response();
    }

    let canned = node.responses.lock().unwrap().get(&path).cloned();
    match canned {
        Some((status, body)) => (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "Not found").into_response(),
    }
}

/// Context pointed at `base_url` with an in-memory credential store.
pub fn context_for(base_url: &str) -> (Arc<WalletContext>, Arc<MemoryStore>) {
    let mut config = WalletConfig::default();
    config.node.base_url = base_url.to_string();
    config.node.request_timeout_secs = Some(5);
    config.store.path = None;

    let store = Arc::new(MemoryStore::new());
    let ctx = WalletContext::new(config, store.clone()).unwrap();
    (Arc::new(ctx), store)
}

/// Context already logged in as USERNAME.
pub async fn logged_in_context(base_url: &str) -> (Arc<WalletContext>, Arc<MemoryStore>) {
    let (ctx, store) = context_for(base_url);
    wallet_dashboard::session::SessionManager::new(ctx.clone())
        .login(USERNAME, PASSWORD)
        .await
        .unwrap();
    (ctx, store)
}
