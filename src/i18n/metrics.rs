//! Translation metrics and observability module.
//!
//! Counters for bundle loading and key resolution, reported on `/health`.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Translation counters owned by a resolver.
#[derive(Debug, Default)]
pub struct TranslationMetrics {
    /// Number of bundles parsed from their source
    bundle_loads: AtomicUsize,

    /// Number of activations served from the bundle cache
    cache_hits: AtomicUsize,

    /// Number of loads that failed and were replaced by the default bundle
    load_fallbacks: AtomicUsize,

    /// Number of lookups that echoed the raw key
    missing_keys: AtomicUsize,
}

impl TranslationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a bundle parsed from its source.
    pub fn record_bundle_load(&self) {
        self.bundle_loads.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an activation served from cache.
    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a load failure recovered with the default bundle.
    pub fn record_load_fallback(&self) {
        self.load_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that fell back to the raw key.
    pub fn record_missing_key(&self) {
        self.missing_keys.fetch_add(1, Ordering::Relaxed);
    }

    pub fn bundle_loads(&self) -> usize {
        self.bundle_loads.load(Ordering::Relaxed)
    }

    pub fn cache_hits(&self) -> usize {
        self.cache_hits.load(Ordering::Relaxed)
    }

    pub fn load_fallbacks(&self) -> usize {
        self.load_fallbacks.load(Ordering::Relaxed)
    }

    pub fn missing_keys(&self) -> usize {
        self.missing_keys.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let loads = self.bundle_loads();
        let hits = self.cache_hits();
        let activations = loads + hits;
        let cache_hit_rate = if activations > 0 {
            (hits as f64 / activations as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            bundle_loads: loads,
            cache_hits: hits,
            cache_hit_rate,
            load_fallbacks: self.load_fallbacks(),
            missing_keys: self.missing_keys(),
        }
    }
}

/// Snapshot of the translation counters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    /// Number of bundles parsed from source
    pub bundle_loads: usize,

    /// Number of cache hits
    pub cache_hits: usize,

    /// Cache hit rate as a percentage (0-100)
    pub cache_hit_rate: f64,

    /// Number of default-bundle substitutions
    pub load_fallbacks: usize,

    /// Number of raw-key fallbacks
    pub missing_keys: usize,
}
