//! Domain model for persisted todos.
//!
//! # Invariants
//! - Every stored todo carries a store-assigned, never-reused `TodoId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod todo;
