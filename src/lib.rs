//! orderdex - A strict, deterministic, in-memory order index
//!
//! Maps unique order IDs to book titles with AVL-balanced lookups.

pub mod index;
pub mod observability;
