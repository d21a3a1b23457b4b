//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract for todos.
//! - Isolate SQLite query details from the store facade.
//!
//! # Invariants
//! - Each repository call issues exactly one data statement.
//! - Not-found on update/delete is an affected count of `0`, not an error.

pub mod todo_repo;
