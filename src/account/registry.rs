//! Shared registry of known account names.

use dashmap::DashSet;
use tokio::sync::watch;

/// Account names seen in balance listings.
///
/// Names are only ever added. Subscribers receive a sorted snapshot
/// whenever a merge adds something new.
#[derive(Debug)]
pub struct AccountRegistry {
    names: DashSet<String>,
    tx: watch::Sender<Vec<String>>,
}

impl AccountRegistry {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(Vec::new());
        Self {
            names: DashSet::new(),
            tx,
        }
    }

    /// Add every name not yet known. Returns how many were new.
    pub fn merge<I, S>(&self, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut added = 0;
        for name in names {
            if self.names.insert(name.into()) {
                added += 1;
            }
        }
        if added > 0 {
            self.tx.send_replace(self.names());
        }
        added
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Sorted snapshot of the known names.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.names.iter().map(|n| n.key().clone()).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<String>> {
        self.tx.subscribe()
    }
}

impl Default for AccountRegistry {
    fn default() -> Self {
        Self::new()
    }
}
