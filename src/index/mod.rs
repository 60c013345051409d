//! Order index subsystem for orderdex
//!
//! A self-balancing ordered index mapping order IDs to book titles. The
//! whole structure is in-memory state for the lifetime of the owning
//! process.
//!
//! # Design Principles
//!
//! - Deterministic: identical operation sequences produce identical trees
//! - In-memory only: no persistence, no rebuild sources
//! - Single-writer: no internal synchronization, callers serialize access
//!
//! # Invariants
//!
//! - BST ordering: left keys < node key < right keys, everywhere
//! - Height correctness: cached height = 1 + max(child heights)
//! - AVL balance: child heights differ by at most one at every node
//! - Key uniqueness: duplicate insertion is a no-op

mod avl;
mod errors;
mod manager;

pub use avl::{AvlTree, InOrderIter, OrderId};
pub use errors::{IndexError, IndexErrorCode, IndexResult, Severity};
pub use manager::{OrderIndex, OrderRecord};
