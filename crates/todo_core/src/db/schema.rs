//! Schema definition and the lazy `todos` table bootstrap.

use super::StorageResult;
use rusqlite::Connection;

pub const TODOS_TABLE: &str = "todos";

/// Columns the store reads and writes, in select order.
pub const TODOS_COLUMNS: &[&str] = &["id", "title", "description", "is_completed"];

// AUTOINCREMENT keeps deleted ids retired for the lifetime of the file.
const CREATE_TODOS_SQL: &str = "CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT,
    is_completed INTEGER DEFAULT 0
);";

/// Creates the `todos` table when absent.
///
/// Safe to call on every startup; an existing table and its rows are kept.
/// When the table is already present no DDL runs, so read-only connections
/// are accepted.
pub fn ensure_schema(conn: &Connection) -> StorageResult<()> {
    if table_exists(conn, TODOS_TABLE)? {
        return Ok(());
    }
    conn.execute_batch(CREATE_TODOS_SQL)?;
    Ok(())
}

/// Returns whether `table` exists in the main schema.
pub fn table_exists(conn: &Connection, table: &str) -> StorageResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

/// Lists the column names of `table` in declaration order.
pub fn table_columns(conn: &Connection, table: &str) -> StorageResult<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
    let names = stmt
        .query_map([table], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(names)
}
