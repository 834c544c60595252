//! The resolver as a long-lived object: owns the catalog snapshot and the RNG.

use std::sync::{Arc, Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use storefront_catalog::{Catalog, CatalogCache, CatalogSource, RefreshOutcome};

use crate::reply::Reply;
use crate::resolver;
use crate::responses;

/// Storefront chat assistant.
///
/// `answer`/`resolve` run synchronously against the current catalog snapshot;
/// `refresh_catalog` may run concurrently and swaps the snapshot when it completes.
/// Until the first successful refresh the catalog is empty and product questions
/// get a "loading" reply.
pub struct Assistant {
    cache: CatalogCache,
    source: Arc<dyn CatalogSource>,
    rng: Mutex<Box<dyn RngCore + Send>>,
}

impl Assistant {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self::with_rng(source, StdRng::from_entropy())
    }

    /// Use a caller-provided randomness source (phrase choice, product sampling).
    pub fn with_rng(source: Arc<dyn CatalogSource>, rng: impl RngCore + Send + 'static) -> Self {
        Self {
            cache: CatalogCache::new(),
            source,
            rng: Mutex::new(Box::new(rng)),
        }
    }

    /// Resolve a query into structured reply content.
    pub fn answer(&self, query: &str) -> Reply {
        let catalog = self.cache.snapshot();
        // The RNG has no invariants a panic could break.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        resolver::resolve(query, &catalog, &mut **rng)
    }

    /// Resolve a query into reply text. Never empty.
    pub fn resolve(&self, query: &str) -> String {
        self.answer(query).text
    }

    /// Fetch the catalog and swap it in; on failure the previous snapshot stays.
    pub async fn refresh_catalog(&self) -> RefreshOutcome {
        self.cache.refresh(self.source.as_ref()).await
    }

    pub fn catalog(&self) -> Arc<Catalog> {
        self.cache.snapshot()
    }

    /// Opening line shown when the chat window first opens.
    pub fn welcome(&self) -> &'static str {
        responses::WELCOME
    }
}

impl core::fmt::Debug for Assistant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Assistant")
            .field("catalog_size", &self.cache.snapshot().len())
            .finish_non_exhaustive()
    }
}
