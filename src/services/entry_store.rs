use crate::error::StoreError;
use async_trait::async_trait;
use oklch_map::ColorEntry;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

/// Buffered appends per subscriber before it starts lagging
/// Records buffered per live-feed subscriber before it lags
pub const CHANNEL_CAPACITY: usize = 256;

/// Outcome of a cleanup sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneReport {
    /// Suspicious records removed
    pub deleted: usize,
    /// Accepted records whose moderation note was dropped
    pub updated: usize,
}

/// Trait for named-color record storage
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Append a new record and notify subscribers
    async fn append(&self, entry: ColorEntry) -> Result<(), StoreError>;

    /// All records in insertion order
    async fn snapshot(&self) -> Vec<ColorEntry>;

    /// Receive every record appended from now on
    fn subscribe(&self) -> broadcast::Receiver<ColorEntry>;

    /// Restore records from a backup.
    ///
    /// Seed records are discarded. Existing records stay in place and imported
    /// ones follow; a repeated id keeps its first position and its last value.
    /// Records without an id are skipped. Returns the number of records taken
    /// from `entries`.
    async fn import(&self, entries: Vec<ColorEntry>) -> usize;

    /// Cleanup sweep over records with `timestamp <= cutoff_ms`
    async fn prune(&self, cutoff_ms: i64) -> PruneReport;

    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// In-memory record storage
pub struct InMemoryStore {
    entries: Arc<RwLock<Vec<ColorEntry>>>,
    sender: broadcast::Sender<ColorEntry>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
            sender,
        }
    }

    /// Create a store holding `entries` without notifying anyone
    pub fn with_entries(entries: Vec<ColorEntry>) -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            entries: Arc::new(RwLock::new(entries)),
            sender,
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntryStore for InMemoryStore {
    async fn append(&self, entry: ColorEntry) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;
        if entries.iter().any(|e| e.id == entry.id) {
            return Err(StoreError::DuplicateId(entry.id));
        }
        entries.push(entry.clone());
        drop(entries);

        // No subscribers is not an error
        let _ = self.sender.send(entry);
        Ok(())
    }

    async fn snapshot(&self) -> Vec<ColorEntry> {
        self.entries.read().await.clone()
    }

    fn subscribe(&self) -> broadcast::Receiver<ColorEntry> {
        self.sender.subscribe()
    }

    async fn import(&self, imported: Vec<ColorEntry>) -> usize {
        let mut entries = self.entries.write().await;

        let mut merged: Vec<ColorEntry> = Vec::with_capacity(entries.len() + imported.len());
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut taken = 0;

        let current = entries.drain(..).filter(|e| !e.is_seed);
        for (entry, from_backup) in current
            .map(|e| (e, false))
            .chain(imported.into_iter().map(|e| (e, true)))
        {
            if entry.id.is_empty() {
                continue;
            }
            if from_backup {
                taken += 1;
            }
            match positions.get(&entry.id) {
                Some(&index) => merged[index] = entry,
                None => {
                    positions.insert(entry.id.clone(), merged.len());
                    merged.push(entry);
                }
            }
        }

        *entries = merged;
        tracing::info!(imported = taken, total = entries.len(), "Records imported");
        taken
    }

    async fn prune(&self, cutoff_ms: i64) -> PruneReport {
        let mut entries = self.entries.write().await;
        let mut report = PruneReport::default();

        entries.retain_mut(|entry| {
            if entry.timestamp > cutoff_ms {
                return true;
            }
            if entry.is_suspicious {
                report.deleted += 1;
                return false;
            }
            if entry.suspicious_reason.take().is_some() {
                report.updated += 1;
            }
            true
        });

        tracing::info!(
            cutoff_ms,
            deleted = report.deleted,
            updated = report.updated,
            "Cleanup sweep finished"
        );
        report
    }

    async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
