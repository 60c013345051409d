//! Index Invariant Tests
//!
//! Tests for structural invariants through the public surface:
//! - Traversal yields strictly ascending keys after any operation mix
//! - Tree height stays within the AVL bound
//! - The index agrees with a reference model under seeded random workloads

use orderdex::index::{OrderId, OrderIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

// =============================================================================
// Helper Functions
// =============================================================================

fn assert_strictly_ascending(index: &OrderIndex) {
    let keys: Vec<OrderId> = index.in_order().map(|(id, _)| id).collect();
    for pair in keys.windows(2) {
        assert!(pair[0] < pair[1], "keys not strictly ascending: {:?}", pair);
    }
}

/// AVL trees with n nodes have height at most ~1.44 * log2(n + 2).
fn assert_height_within_avl_bound(index: &OrderIndex) {
    let n = index.node_count();
    if n == 0 {
        assert_eq!(index.height(), 0);
        return;
    }

    let bound = 1.4405 * ((n as f64) + 2.0).log2();
    assert!(
        (index.height() as f64) <= bound,
        "height {} exceeds AVL bound {:.2} for {} nodes",
        index.height(),
        bound,
        n
    );

    // And at least the binary-tree minimum.
    let floor = ((n + 1) as f64).log2().ceil() as u32;
    assert!(index.height() >= floor);
}

// =============================================================================
// Directed Workloads
// =============================================================================

/// Ascending inserts, the unbalanced-BST worst case, stay logarithmic.
#[test]
fn test_ascending_workload_stays_balanced() {
    let mut index = OrderIndex::new();
    for id in 1..=1024 {
        index.insert(id, format!("book_{}", id));
    }

    assert_eq!(index.node_count(), 1024);
    assert_strictly_ascending(&index);
    assert_height_within_avl_bound(&index);
}

/// Descending inserts mirror the worst case.
#[test]
fn test_descending_workload_stays_balanced() {
    let mut index = OrderIndex::new();
    for id in (1..=1024).rev() {
        index.insert(id, format!("book_{}", id));
    }

    assert_eq!(index.node_count(), 1024);
    assert_strictly_ascending(&index);
    assert_height_within_avl_bound(&index);
}

/// Deleting one flank forces rebalancing on the way back up.
#[test]
fn test_flank_deletion_rebalances() {
    let mut index = OrderIndex::new();
    for id in 1..=255 {
        index.insert(id, format!("book_{}", id));
    }

    for id in 1..=128 {
        index.delete(id);
        assert_height_within_avl_bound(&index);
    }

    assert_eq!(index.node_count(), 127);
    assert_strictly_ascending(&index);
}

// =============================================================================
// Seeded Random Workloads
// =============================================================================

/// Random insert/delete mix, checked against a reference BTreeMap.
#[test]
fn test_random_workload_matches_model() {
    let mut rng = StdRng::seed_from_u64(0x0DEC);
    let mut index = OrderIndex::new();
    let mut model: BTreeMap<OrderId, String> = BTreeMap::new();

    for step in 0..5_000 {
        let id = rng.gen_range(0..500);
        if rng.gen_bool(0.6) {
            let title = format!("book_{}", id);
            index.insert(id, title.clone());
            model.entry(id).or_insert(title);
        } else {
            index.delete(id);
            model.remove(&id);
        }

        if step % 250 == 0 {
            assert_height_within_avl_bound(&index);
        }
    }

    assert_eq!(index.node_count(), model.len());
    assert_strictly_ascending(&index);
    assert_height_within_avl_bound(&index);

    // Entry-by-entry agreement, both directions.
    for (id, title) in &model {
        assert_eq!(index.search(*id), Some(title.as_str()));
    }
    let traversed: Vec<(OrderId, String)> = index
        .in_order()
        .map(|(id, title)| (id, title.to_string()))
        .collect();
    let expected: Vec<(OrderId, String)> =
        model.iter().map(|(id, t)| (*id, t.clone())).collect();
    assert_eq!(traversed, expected);
}

/// Same seed, same operations, same tree: height and traversal agree across
/// two independently built indexes.
#[test]
fn test_random_workload_deterministic() {
    let build = || {
        let mut rng = StdRng::seed_from_u64(7);
        let mut index = OrderIndex::new();
        for _ in 0..1_000 {
            let id = rng.gen_range(0..200);
            if rng.gen_bool(0.5) {
                index.insert(id, format!("book_{}", id));
            } else {
                index.delete(id);
            }
        }
        index
    };

    let a = build();
    let b = build();

    assert_eq!(a.height(), b.height());
    assert_eq!(a.node_count(), b.node_count());
    assert_eq!(a.snapshot(), b.snapshot());
}

/// Drain everything; the empty index must be fully reusable afterwards.
#[test]
fn test_drain_to_empty_and_reuse() {
    let mut index = OrderIndex::new();
    for id in [8, 3, 10, 1, 6, 14, 4, 7, 13] {
        index.insert(id, format!("book_{}", id));
    }

    let ids: Vec<OrderId> = index.in_order().map(|(id, _)| id).collect();
    for id in ids {
        index.delete(id);
    }

    assert!(index.is_empty());
    assert_eq!(index.height(), 0);

    index.insert(42, "fresh start");
    assert_eq!(index.search(42), Some("fresh start"));
    assert_eq!(index.node_count(), 1);
}
