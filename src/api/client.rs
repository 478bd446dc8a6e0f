//! Wallet node REST client.
//!
//! # Responsibilities
//! - Build endpoint URLs from the configured base URL
//! - Attach basic auth to `/private/*` calls
//! - Classify failures (transport, auth, rejected) keeping the raw message
//! - Decode JSON bodies without interpreting their schema

use reqwest::{RequestBuilder, Response, StatusCode};
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::api::types::{
    endpoints, ApiError, ApiResult, ContractCallBody, PageQuery, SendManyBody,
};
use crate::config::schema::NodeConfig;
use crate::session::Credentials;

/// HTTP client for one wallet node.
#[derive(Clone)]
pub struct NodeClient {
    http: reqwest::Client,
    base_url: Url,
}

impl NodeClient {
    /// Create a client for the node described by `config`.
    ///
    /// No request is sent; an unreachable node only shows up on first use.
    pub fn new(config: &NodeConfig) -> ApiResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| ApiError::InvalidUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;

        tracing::debug!(base_url = %base_url, "Node client initialized");
        Ok(Self { http, base_url })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    fn private_get(&self, path: &str, creds: &Credentials) -> RequestBuilder {
        self.http
            .get(self.endpoint(path))
            .basic_auth(&creds.username, Some(&creds.password))
    }

    fn private_post(&self, path: &str, creds: &Credentials) -> RequestBuilder {
        self.http
            .post(self.endpoint(path))
            .basic_auth(&creds.username, Some(&creds.password))
    }

    /// `GET /public/getchaininfo`.
    pub async fn chain_info(&self) -> ApiResult<Value> {
        let res = self.http.get(self.endpoint(endpoints::CHAIN_INFO)).send().await?;
        decode(res).await
    }

    /// `GET /private/getsysteminfo`. Doubles as the credential check.
    pub async fn system_info(&self, creds: &Credentials) -> ApiResult<Value> {
        let res = self.private_get(endpoints::SYSTEM_INFO, creds).send().await?;
        decode(res).await
    }

    /// `GET /private/listbalance`.
    pub async fn list_balance(&self, creds: &Credentials, query: &PageQuery) -> ApiResult<Value> {
        let res = self
            .private_get(endpoints::LIST_BALANCE, creds)
            .query(query)
            .send()
            .await?;
        decode(res).await
    }

    /// `GET /private/listtransactions`.
    pub async fn list_transactions(
        &self,
        creds: &Credentials,
        query: &PageQuery,
    ) -> ApiResult<Value> {
        let res = self
            .private_get(endpoints::LIST_TRANSACTIONS, creds)
            .query(query)
            .send()
            .await?;
        decode(res).await
    }

    /// `POST /private/sendmany`.
    pub async fn send_many(&self, creds: &Credentials, body: &SendManyBody) -> ApiResult<Value> {
        let res = self
            .private_post(endpoints::SEND_MANY, creds)
            .json(body)
            .send()
            .await?;
        decode(res).await
    }

    /// `POST /private/contracttransfer`.
    pub async fn contract_transfer(
        &self,
        creds: &Credentials,
        body: &ContractCallBody,
    ) -> ApiResult<Value> {
        let res = self
            .private_post(endpoints::CONTRACT_TRANSFER, creds)
            .json(body)
            .send()
            .await?;
        decode(res).await
    }
}

async fn decode(res: Response) -> ApiResult<Value> {
    let status = res.status();
    let text = res.text().await?;

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ApiError::Unauthorized(text));
    }
    if !status.is_success() {
        return Err(ApiError::Rejected {
            status: status.as_u16(),
            message: text,
        });
    }

    Ok(serde_json::from_str(&text)?)
}

impl std::fmt::Debug for NodeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeClient")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}
