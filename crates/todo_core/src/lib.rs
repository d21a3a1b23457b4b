//! Core persistence layer for todo records.
//! This crate owns the SQLite file and every statement run against it.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use db::{StorageError, StorageResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::{Todo, TodoId};
pub use repo::todo_repo::{SqliteTodoRepository, TodoRepository};
pub use store::TodoStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
