//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Catalog loads (which source won, per front-end)
//! - Admin mutations
//! - Persistence and seed failures

use once_cell::sync::Lazy;
use prometheus::{IntCounter, IntCounterVec, Opts};

// =============================================================================
// Catalog Store Metrics
// =============================================================================

/// Catalog loads by front-end and winning source.
pub static CATALOG_LOADS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("storefront_catalog_loads_total", "Total catalog loads"),
        &["frontend", "source"], // source: "persisted", "seed", "sample", "empty"
    )
    .unwrap()
});

/// Persisted data that could not be parsed and was skipped.
pub static PERSISTED_READ_FAILURES: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "storefront_persisted_read_failures_total",
        "Persisted catalog reads that failed or were unparsable",
    )
    .unwrap()
});

/// Rejected persistence writes (quota, I/O).
pub static PERSISTENCE_WRITE_FAILURES: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "storefront_persistence_write_failures_total",
        "Catalog saves rejected by the storage backend",
    )
    .unwrap()
});

/// Seed resource fetch failures.
pub static SEED_FETCH_FAILURES: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "storefront_seed_fetch_failures_total",
        "Seed resource fetches that failed",
    )
    .unwrap()
});

// =============================================================================
// Admin Editor Metrics
// =============================================================================

/// Admin mutations by action and result.
pub static CATALOG_MUTATIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "storefront_catalog_mutations_total",
            "Admin catalog mutations",
        ),
        &["action", "result"], // action: "create", "update", "delete"
    )
    .unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(CATALOG_LOADS.clone()),
        Box::new(PERSISTED_READ_FAILURES.clone()),
        Box::new(PERSISTENCE_WRITE_FAILURES.clone()),
        Box::new(SEED_FETCH_FAILURES.clone()),
        Box::new(CATALOG_MUTATIONS.clone()),
    ]
}
