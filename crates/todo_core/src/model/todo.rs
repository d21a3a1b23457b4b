//! Todo record shape.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the store on insert.
///
/// Unique for the lifetime of the database file; ids of deleted rows are
/// never handed out again.
pub type TodoId = i64;

/// One row of the `todos` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    /// Absent descriptions are stored as NULL.
    pub description: Option<String>,
    /// Persisted as an integer flag (0/1), `false` on insert.
    pub is_completed: bool,
}
