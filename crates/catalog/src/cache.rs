//! Snapshot cache for the catalog.
//!
//! Readers take an `Arc<Catalog>` snapshot and never hold the lock while working.
//! Refresh replaces the whole snapshot (last write wins) and keeps the previous one
//! when the fetch fails.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use serde::Serialize;

use crate::catalog::Catalog;
use crate::source::CatalogSource;

/// What a refresh did to the cached snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RefreshOutcome {
    /// The snapshot was replaced with `count` products.
    Replaced { count: usize },
    /// The fetch failed; the prior snapshot (`count` products) is still served.
    Retained { count: usize, error: String },
    /// Another refresh was already outstanding; this call did nothing.
    InFlight,
}

#[derive(Debug, Default)]
pub struct CatalogCache {
    current: RwLock<Arc<Catalog>>,
    refreshing: AtomicBool,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
            refreshing: AtomicBool::new(false),
        }
    }

    /// Current snapshot (cheap `Arc` clone).
    pub fn snapshot(&self) -> Arc<Catalog> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&*guard),
            // A writer only ever stores a fully built Arc, so the value is intact.
            Err(poisoned) => Arc::clone(&*poisoned.into_inner()),
        }
    }

    /// Swap in a new snapshot wholesale.
    pub fn replace(&self, catalog: Catalog) {
        let next = Arc::new(catalog);
        match self.current.write() {
            Ok(mut guard) => *guard = next,
            Err(poisoned) => *poisoned.into_inner() = next,
        }
    }

    /// Fetch from `source` and replace the snapshot.
    ///
    /// At most one fetch is outstanding per cache; overlapping calls return
    /// `InFlight` immediately. No retry, no backoff.
    pub async fn refresh(&self, source: &dyn CatalogSource) -> RefreshOutcome {
        if self
            .refreshing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("catalog refresh already in flight");
            return RefreshOutcome::InFlight;
        }
        // Cleared on drop, so a cancelled refresh does not lock out later ones.
        let _in_flight = InFlightGuard(&self.refreshing);

        match source.fetch().await {
            Ok(products) => {
                let catalog = Catalog::from_products(products);
                let count = catalog.len();
                self.replace(catalog);
                tracing::info!(count, "catalog refreshed");
                RefreshOutcome::Replaced { count }
            }
            Err(err) => {
                let count = self.snapshot().len();
                tracing::warn!(error = %err, retained = count, "catalog refresh failed; keeping previous snapshot");
                RefreshOutcome::Retained {
                    count,
                    error: err.to_string(),
                }
            }
        }
    }
}

struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
