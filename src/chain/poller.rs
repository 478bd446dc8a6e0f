//! Chain info refresh and the optional polling loop.

use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};

use crate::context::WalletContext;
use crate::error::WalletResult;
use crate::render::{render, render_capped, scalar_text};
use crate::ui::panels;

/// Fetches and renders public chain state.
#[derive(Debug, Clone)]
pub struct ChainInfoPoller {
    ctx: Arc<WalletContext>,
}

impl ChainInfoPoller {
    pub fn new(ctx: Arc<WalletContext>) -> Self {
        Self { ctx }
    }

    /// Fetch chain info once and update the block panels.
    pub async fn refresh(&self) -> WalletResult<Value> {
        let info = self
            .ctx
            .client
            .chain_info()
            .await
            .map_err(|e| self.ctx.fail(e))?;

        let width = self.ctx.indent_width();
        let best = info.get("best").unwrap_or(&Value::Null);
        let mining = info.get("mining").unwrap_or(&Value::Null);

        self.ctx.display.set(panels::BEST_BLOCK, render(best, width, ""));
        self.ctx.display.set(
            panels::MINING,
            render_capped(mining, self.ctx.config.chain.mining_entries, width),
        );

        let height = best.get("height").map(scalar_text).unwrap_or_default();
        tracing::debug!(height = %height, "Chain info refreshed");
        self.ctx.notices.notice(format!("update block info {height}"));
        Ok(info)
    }

    /// Refresh every `every` until `shutdown` resolves.
    ///
    /// A failed tick is logged and the loop waits for the next one.
    pub async fn run<F>(&self, every: Duration, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        let mut ticker = interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        tracing::info!(interval_secs = every.as_secs(), "Chain info polling started");
        loop {
            tokio::select! {
                _ = &mut shutdown => break,
                _ = ticker.tick() => {
                    if let Err(e) = self.refresh().await {
                        tracing::warn!(error = %e, "Chain info refresh failed");
                    }
                }
            }
        }
        tracing::info!("Chain info polling stopped");
    }
}
