//! Balance and transaction history pipeline.

use arc_swap::ArcSwapOption;
use serde_json::Value;
use std::sync::Arc;

use crate::api::PageQuery;
use crate::context::WalletContext;
use crate::error::{WalletError, WalletResult};
use crate::render::{render, scalar_text};
use crate::session::Credentials;
use crate::ui::panels;

/// Position in the paginated account views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    /// Minimum confirmation count.
    pub confirm: u32,
    /// Zero-based page number.
    pub page: u32,
}

impl PageCursor {
    pub fn first(confirm: u32) -> Self {
        Self { confirm, page: 0 }
    }

    /// Following page with the same confirm filter.
    pub fn next(self) -> Self {
        Self {
            confirm: self.confirm,
            page: self.page.saturating_add(1),
        }
    }
}

/// Named stages of [`AccountSyncService::refresh_balances`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStage {
    Balances,
    History,
}

impl std::fmt::Display for SyncStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncStage::Balances => f.write_str("balances"),
            SyncStage::History => f.write_str("history"),
        }
    }
}

/// Outcome of one balance/history refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub cursor: PageCursor,
    /// Balance buckets rendered.
    pub buckets: usize,
    /// History entries rendered.
    pub transactions: usize,
    /// The node's own "more pages" flag, when it sends one.
    pub more: Option<bool>,
}

/// Fetches balances and paginated history for the logged-in user.
pub struct AccountSyncService {
    ctx: Arc<WalletContext>,
    next: ArcSwapOption<PageCursor>,
}

impl AccountSyncService {
    pub fn new(ctx: Arc<WalletContext>) -> Self {
        Self {
            ctx,
            next: ArcSwapOption::empty(),
        }
    }

    /// First page using the configured confirm threshold.
    pub fn default_cursor(&self) -> PageCursor {
        PageCursor::first(self.ctx.config.account.default_confirm)
    }

    /// Cursor the next-page control is bound to, once a page has loaded.
    pub fn next_cursor(&self) -> Option<PageCursor> {
        self.next.load_full().map(|c| *c)
    }

    /// Balances, then history, then bind the next-page control.
    ///
    /// A failing stage aborts the rest; panels from earlier stages stay.
    pub async fn refresh_balances(&self, cursor: PageCursor) -> WalletResult<SyncReport> {
        let creds = self.ctx.require_login("refresh balances")?;

        let buckets = self
            .balance_stage(&creds, cursor)
            .await
            .map_err(|e| self.abort(SyncStage::Balances, e))?;
        let (transactions, more) = self
            .history_stage(&creds, cursor)
            .await
            .map_err(|e| self.abort(SyncStage::History, e))?;

        self.next.store(Some(Arc::new(cursor.next())));
        tracing::info!(
            confirm = cursor.confirm,
            page = cursor.page,
            buckets,
            transactions,
            "Account view refreshed"
        );
        Ok(SyncReport {
            cursor,
            buckets,
            transactions,
            more,
        })
    }

    /// Follow the next-page control bound by the last refresh.
    pub async fn next_page(&self) -> WalletResult<SyncReport> {
        let Some(cursor) = self.next_cursor() else {
            return Err(self
                .ctx
                .fail(WalletError::State("no account page loaded yet".into())));
        };
        self.refresh_balances(cursor).await
    }

    /// Merge every account name from an unpaginated listing into the registry.
    ///
    /// Returns how many names were new.
    pub async fn refresh_account_list(&self) -> WalletResult<usize> {
        let creds = self.ctx.require_login("refresh account list")?;
        let query = PageQuery::all(self.ctx.config.account.default_confirm);
        let balances = self
            .ctx
            .client
            .list_balance(&creds, &query)
            .await
            .map_err(|e| self.ctx.fail(e))?;

        let added = match &balances {
            Value::Object(map) => self.ctx.accounts.merge(map.keys().cloned()),
            _ => 0,
        };
        tracing::debug!(added, total = self.ctx.accounts.len(), "Account list merged");
        Ok(added)
    }

    async fn balance_stage(&self, creds: &Credentials, cursor: PageCursor) -> WalletResult<usize> {
        let query = PageQuery::paged(
            cursor.confirm,
            self.ctx.config.account.balance_limit,
            cursor.page,
        );
        let balances = self.ctx.client.list_balance(creds, &query).await?;

        let width = self.ctx.indent_width();
        self.ctx.display.clear_prefix(panels::BALANCE_PREFIX);
        let mut count = 0;
        if let Value::Object(map) = &balances {
            for (name, bucket) in map {
                self.ctx.display.set(panels::balance(name), render(bucket, width, ""));
                count += 1;
            }
        }
        Ok(count)
    }

    async fn history_stage(
        &self,
        creds: &Credentials,
        cursor: PageCursor,
    ) -> WalletResult<(usize, Option<bool>)> {
        let query = PageQuery::paged(
            cursor.confirm,
            self.ctx.config.account.history_limit,
            cursor.page,
        );
        let history = self.ctx.client.list_transactions(creds, &query).await?;

        let width = self.ctx.indent_width();
        self.ctx.display.clear_prefix(panels::HISTORY_PREFIX);
        let entries = history_entries(&history);
        for (key, entry) in &entries {
            self.ctx.display.set(panels::history(key), render(entry, width, ""));
        }
        let more = history.get("next").and_then(Value::as_bool);
        Ok((entries.len(), more))
    }

    fn abort(&self, stage: SyncStage, err: WalletError) -> WalletError {
        tracing::warn!(stage = %stage, error = %err, "Account sync aborted");
        self.ctx.fail(err)
    }
}

impl std::fmt::Debug for AccountSyncService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountSyncService")
            .field("next", &self.next_cursor())
            .finish()
    }
}

/// History entries keyed by their `index` field, or their position.
///
/// Accepts `{"txs": [...]}` as well as a bare array.
fn history_entries(history: &Value) -> Vec<(String, &Value)> {
    let items = match history {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => match map.get("txs") {
            Some(Value::Array(items)) => items.as_slice(),
            _ => &[],
        },
        _ => &[],
    };
    items
        .iter()
        .enumerate()
        .map(|(pos, entry)| {
            let key = entry
                .get("index")
                .map(scalar_text)
                .unwrap_or_else(|| pos.to_string());
            (key, entry)
        })
        .collect()
}
