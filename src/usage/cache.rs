//! Single-slot usage cache.
//!
//! Holds at most one [`UsageIndex`] snapshot. The snapshot is populated
//! lazily on the first [`UsageCache::load`] after construction or after a
//! [`UsageCache::clear`], and reused until the next clear. Concurrent loads
//! share a single scan.

use std::sync::{Arc, PoisonError, RwLock};

use tokio::sync::Mutex;
use tracing::debug;

use crate::error::{Error, Result};
use crate::usage::index::UsageIndex;
use crate::usage::source::ContentSource;

/// Owned, explicitly passed usage cache.
#[derive(Debug, Default)]
pub struct UsageCache {
    slot: RwLock<Option<Arc<UsageIndex>>>,
    source: Option<ContentSource>,
    scan_gate: Mutex<()>,
}

impl UsageCache {
    /// A cache with no content source. It must be stocked with
    /// [`UsageCache::set`] or [`UsageCache::store_documents`].
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache that scans `source` on demand.
    pub fn with_source(source: ContentSource) -> Self {
        Self {
            source: Some(source),
            ..Self::default()
        }
    }

    pub fn source(&self) -> Option<&ContentSource> {
        self.source.as_ref()
    }

    /// Store a new snapshot, replacing any previous one.
    pub fn set(&self, index: UsageIndex) -> Arc<UsageIndex> {
        let index = Arc::new(index);
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&index));
        index
    }

    /// The current snapshot, if any.
    pub fn get(&self) -> Option<Arc<UsageIndex>> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drop the current snapshot. The next [`load`](Self::load) rescans.
    pub fn clear(&self) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn has(&self) -> bool {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Scan `documents` and store the result as the current snapshot.
    pub fn store_documents<I>(&self, documents: I) -> Arc<UsageIndex>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.set(crate::usage::index::build_usage_index(documents))
    }

    /// The current snapshot, scanning the content source if the slot is empty.
    pub async fn load(&self) -> Result<Arc<UsageIndex>> {
        if let Some(index) = self.get() {
            return Ok(index);
        }

        let _guard = self.scan_gate.lock().await;
        if let Some(index) = self.get() {
            return Ok(index);
        }

        let source = self.source.as_ref().ok_or(Error::UsageUnavailable)?;
        let index = source.scan().await?;
        debug!(attributes = index.len(), "usage index scanned");
        Ok(self.set(index))
    }
}
