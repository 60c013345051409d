//! Order index facade for orderdex
//!
//! Wraps the AVL engine with the public operation surface.
//!
//! # API
//!
//! - `insert(order_id, title)` - Add an order; duplicate IDs are no-ops
//! - `search(order_id)` - Exact match lookup
//! - `delete(order_id)` - Remove an order; missing IDs are no-ops
//! - `find_min_order()` / `find_max_order()` - Boundary entries
//! - `in_order()` - Ascending traversal
//! - `height()` / `node_count()` - Structural queries

use serde::{Deserialize, Serialize};

use super::avl::{AvlTree, InOrderIter, OrderId};
use super::errors::{IndexError, IndexResult};
use crate::observability::{Logger, MetricsRegistry, MetricsSnapshot};

/// An owned copy of one index entry.
///
/// Query results are copies, never handles into the tree: a later mutation
/// may relocate or overwrite the node that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Unique order identifier
    pub order_id: OrderId,
    /// Book title carried by the order
    pub title: String,
}

/// In-memory order index backed by an AVL tree.
///
/// Single-writer, no internal synchronization; callers serialize access.
/// All operations leave the index valid, including the error paths.
#[derive(Debug, Default)]
pub struct OrderIndex {
    tree: AvlTree,
    metrics: MetricsRegistry,
    log_events: bool,
}

impl OrderIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty index that emits a structured log line per mutation.
    ///
    /// Logging is read-only and has no effect on index behavior.
    pub fn with_logging() -> Self {
        Self {
            log_events: true,
            ..Self::default()
        }
    }

    /// Insert an order. If the order ID already exists the call is a no-op
    /// and the existing title is preserved.
    pub fn insert(&mut self, order_id: OrderId, title: impl Into<String>) {
        let created = self.tree.insert(order_id, title);

        if created {
            self.metrics.increment_inserts_applied();
            self.log_mutation("ORDER_INSERTED", order_id);
        } else {
            self.metrics.increment_inserts_ignored_duplicate();
            self.log_mutation("ORDER_DUPLICATE_IGNORED", order_id);
        }
    }

    /// Look up the title for an order ID. Absent IDs yield None.
    pub fn search(&self, order_id: OrderId) -> Option<&str> {
        self.metrics.increment_lookups();
        self.tree.get(order_id)
    }

    /// Delete an order. Missing IDs are a no-op.
    pub fn delete(&mut self, order_id: OrderId) {
        let removed = self.tree.remove(order_id);

        if removed {
            self.metrics.increment_deletes_applied();
            self.log_mutation("ORDER_DELETED", order_id);
        } else {
            self.metrics.increment_deletes_ignored_missing();
            self.log_mutation("ORDER_DELETE_MISSING", order_id);
        }
    }

    fn log_mutation(&self, event: &str, order_id: OrderId) {
        if self.log_events {
            let id = order_id.to_string();
            Logger::trace(event, &[("order_id", id.as_str())]);
        }
    }

    /// Entry with the minimum order ID.
    ///
    /// Fails with `ODX_INDEX_EMPTY` on an empty index rather than descending
    /// into an absent root.
    pub fn find_min_order(&self) -> IndexResult<OrderRecord> {
        self.metrics.increment_min_max_queries();
        self.boundary(self.tree.min())
    }

    /// Entry with the maximum order ID.
    ///
    /// Fails with `ODX_INDEX_EMPTY` on an empty index.
    pub fn find_max_order(&self) -> IndexResult<OrderRecord> {
        self.metrics.increment_min_max_queries();
        self.boundary(self.tree.max())
    }

    fn boundary(&self, entry: Option<(OrderId, &str)>) -> IndexResult<OrderRecord> {
        match entry {
            Some((order_id, title)) => Ok(OrderRecord {
                order_id,
                title: title.to_string(),
            }),
            None => {
                if self.log_events {
                    Logger::warn("INDEX_EMPTY_QUERY", &[]);
                }
                Err(IndexError::EmptyIndex)
            }
        }
    }

    /// Tree height: 0 for an empty index. O(1), served from the cache.
    pub fn height(&self) -> u32 {
        self.tree.height()
    }

    /// Number of entries. O(n) full traversal, not cached.
    pub fn node_count(&self) -> usize {
        self.tree.len()
    }

    /// Returns true when the index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Ascending in-order traversal of `(order_id, title)` pairs.
    ///
    /// Lazy and restartable; each call starts a fresh pass.
    pub fn in_order(&self) -> InOrderIter<'_> {
        self.metrics.increment_traversals();
        self.tree.iter()
    }

    /// Owned copies of all entries, ascending by order ID.
    pub fn snapshot(&self) -> Vec<OrderRecord> {
        self.tree
            .iter()
            .map(|(order_id, title)| OrderRecord {
                order_id,
                title: title.to_string(),
            })
            .collect()
    }

    /// Point-in-time view of the operation counters.
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}
