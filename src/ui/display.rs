//! Named text panels holding rendered API responses.

use dashmap::DashMap;
use std::cmp::Ordering;

/// Panel names written by the dashboard components.
pub mod panels {
    pub const BEST_BLOCK: &str = "bestblock";
    pub const MINING: &str = "mining";
    pub const BALANCE_PREFIX: &str = "balance/";
    pub const HISTORY_PREFIX: &str = "history/";
    pub const SEND_RESULT: &str = "send-result";
    pub const CONTRACT_RESULT: &str = "contract-result";

    pub fn balance(account: &str) -> String {
        format!("{BALANCE_PREFIX}{account}")
    }

    pub fn history(index: &str) -> String {
        format!("{HISTORY_PREFIX}{index}")
    }
}

/// Panel name to rendered text. Last writer wins per panel.
#[derive(Debug, Default)]
pub struct DisplayBoard {
    panels: DashMap<String, String>,
}

impl DisplayBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the content of a panel.
    pub fn set(&self, panel: impl Into<String>, text: impl Into<String>) {
        self.panels.insert(panel.into(), text.into());
    }

    pub fn get(&self, panel: &str) -> Option<String> {
        self.panels.get(panel).map(|r| r.value().clone())
    }

    /// Drop every panel whose name starts with `prefix`.
    pub fn clear_prefix(&self, prefix: &str) {
        self.panels.retain(|name, _| !name.starts_with(prefix));
    }

    /// Panels whose name starts with `prefix`, in [`panel_order`].
    pub fn with_prefix(&self, prefix: &str) -> Vec<(String, String)> {
        let mut out: Vec<_> = self
            .panels
            .iter()
            .filter(|r| r.key().starts_with(prefix))
            .map(|r| (r.key().clone(), r.value().clone()))
            .collect();
        out.sort_by(|a, b| panel_order(&a.0, &b.0));
        out
    }

    /// All panels, in [`panel_order`].
    pub fn snapshot(&self) -> Vec<(String, String)> {
        self.with_prefix("")
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

/// Order panels by group, then by suffix.
///
/// Numeric suffixes compare as numbers and sort before other suffixes, so
/// `history/2` comes before `history/10`.
pub fn panel_order(a: &str, b: &str) -> Ordering {
    let (group_a, tail_a) = a.split_once('/').unwrap_or((a, ""));
    let (group_b, tail_b) = b.split_once('/').unwrap_or((b, ""));
    group_a
        .cmp(group_b)
        .then_with(|| match (tail_a.parse::<u64>(), tail_b.parse::<u64>()) {
            (Ok(x), Ok(y)) => x.cmp(&y),
            (Ok(_), Err(_)) => Ordering::Less,
            (Err(_), Ok(_)) => Ordering::Greater,
            (Err(_), Err(_)) => tail_a.cmp(tail_b),
        })
        .then_with(|| a.cmp(b))
}
