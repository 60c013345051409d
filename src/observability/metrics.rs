//! Metrics registry for orderdex
//!
//! - Counters only (no gauges, no histograms)
//! - Monotonic increase, reset only on construction
//! - Atomic increments so read-only queries can still count themselves

use std::sync::atomic::{AtomicU64, Ordering};

/// Operation counters for one order index.
///
/// Relaxed ordering is enough: counters are observational, never part of
/// index behavior.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Inserts that created a node
    inserts_applied: AtomicU64,
    /// Inserts ignored because the order ID already existed
    inserts_ignored_duplicate: AtomicU64,
    /// Deletes that removed a node
    deletes_applied: AtomicU64,
    /// Deletes ignored because the order ID was absent
    deletes_ignored_missing: AtomicU64,
    /// Search calls
    lookups: AtomicU64,
    /// Min/max boundary queries
    min_max_queries: AtomicU64,
    /// In-order traversal passes started
    traversals: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an insert that created a node
    pub fn increment_inserts_applied(&self) {
        self.inserts_applied.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a duplicate insert no-op
    pub fn increment_inserts_ignored_duplicate(&self) {
        self.inserts_ignored_duplicate.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a delete that removed a node
    pub fn increment_deletes_applied(&self) {
        self.deletes_applied.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a missing-key delete no-op
    pub fn increment_deletes_ignored_missing(&self) {
        self.deletes_ignored_missing.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a search
    pub fn increment_lookups(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a min/max query
    pub fn increment_min_max_queries(&self) {
        self.min_max_queries.fetch_add(1, Ordering::Relaxed);
    }

    /// Record the start of a traversal pass
    pub fn increment_traversals(&self) {
        self.traversals.fetch_add(1, Ordering::Relaxed);
    }

    /// Take a point-in-time snapshot of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            inserts_applied: self.inserts_applied.load(Ordering::Relaxed),
            inserts_ignored_duplicate: self.inserts_ignored_duplicate.load(Ordering::Relaxed),
            deletes_applied: self.deletes_applied.load(Ordering::Relaxed),
            deletes_ignored_missing: self.deletes_ignored_missing.load(Ordering::Relaxed),
            lookups: self.lookups.load(Ordering::Relaxed),
            min_max_queries: self.min_max_queries.load(Ordering::Relaxed),
            traversals: self.traversals.load(Ordering::Relaxed),
        }
    }
}

/// Plain-value view of the counters at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetricsSnapshot {
    /// Inserts that created a node
    pub inserts_applied: u64,
    /// Inserts ignored because the order ID already existed
    pub inserts_ignored_duplicate: u64,
    /// Deletes that removed a node
    pub deletes_applied: u64,
    /// Deletes ignored because the order ID was absent
    pub deletes_ignored_missing: u64,
    /// Search calls
    pub lookups: u64,
    /// Min/max boundary queries
    pub min_max_queries: u64,
    /// In-order traversal passes started
    pub traversals: u64,
}
