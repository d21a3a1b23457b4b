//! Todo repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the CRUD statements over the `todos` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - A repository only accepts a connection whose `todos` schema is prepared.
//! - Read paths reject undecodable rows instead of masking them.
//! - `title` is passed through as given; a missing title is rejected by the
//!   table's NOT NULL constraint, not by Rust-side checks.

use crate::db::schema::{table_columns, table_exists, TODOS_COLUMNS, TODOS_TABLE};
use crate::db::{StorageError, StorageResult};
use crate::model::todo::{Todo, TodoId};
use rusqlite::{params, Connection, OptionalExtension, Row};

const TODO_SELECT_SQL: &str = "SELECT id, title, description, is_completed FROM todos";

/// Repository interface for todo CRUD operations.
pub trait TodoRepository {
    fn insert_todo(&self, title: Option<&str>, description: Option<&str>)
        -> StorageResult<TodoId>;
    fn list_todos(&self) -> StorageResult<Vec<Todo>>;
    fn get_todo(&self, id: TodoId) -> StorageResult<Option<Todo>>;
    fn update_todo(
        &self,
        id: TodoId,
        title: Option<&str>,
        description: Option<&str>,
        is_completed: bool,
    ) -> StorageResult<usize>;
    fn delete_todo(&self, id: TodoId) -> StorageResult<usize>;
}

/// SQLite-backed todo repository.
pub struct SqliteTodoRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTodoRepository<'conn> {
    /// Wraps a connection after checking that the `todos` schema is in place.
    ///
    /// # Errors
    /// - `MissingRequiredTable` when `todos` does not exist.
    /// - `MissingRequiredColumn` when one of the store's columns is absent.
    pub fn try_new(conn: &'conn Connection) -> StorageResult<Self> {
        if !table_exists(conn, TODOS_TABLE)? {
            return Err(StorageError::MissingRequiredTable(TODOS_TABLE));
        }

        let present = table_columns(conn, TODOS_TABLE)?;
        if let Some(column) = TODOS_COLUMNS
            .iter()
            .copied()
            .find(|column| !present.iter().any(|name| name == column))
        {
            return Err(StorageError::MissingRequiredColumn {
                table: TODOS_TABLE,
                column,
            });
        }

        Ok(Self { conn })
    }

    /// Wraps a connection without schema checks.
    ///
    /// Callers must have run `ensure_schema` on `conn` already.
    pub(crate) fn new_unchecked(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TodoRepository for SqliteTodoRepository<'_> {
    fn insert_todo(
        &self,
        title: Option<&str>,
        description: Option<&str>,
    ) -> StorageResult<TodoId> {
        self.conn.execute(
            "INSERT INTO todos (title, description) VALUES (?1, ?2);",
            params![title, description],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn list_todos(&self) -> StorageResult<Vec<Todo>> {
        let mut stmt = self.conn.prepare(&format!("{TODO_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut todos = Vec::new();

        while let Some(row) = rows.next()? {
            todos.push(parse_todo_row(row)?);
        }

        Ok(todos)
    }

    fn get_todo(&self, id: TodoId) -> StorageResult<Option<Todo>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TODO_SELECT_SQL} WHERE id = ?1;"))?;
        let row = stmt
            .query_row([id], |row| Ok(parse_todo_row(row)))
            .optional()?;
        row.transpose()
    }

    fn update_todo(
        &self,
        id: TodoId,
        title: Option<&str>,
        description: Option<&str>,
        is_completed: bool,
    ) -> StorageResult<usize> {
        let changed = self.conn.execute(
            "UPDATE todos
             SET
                title = ?1,
                description = ?2,
                is_completed = ?3
             WHERE id = ?4;",
            params![title, description, bool_to_int(is_completed), id],
        )?;
        Ok(changed)
    }

    fn delete_todo(&self, id: TodoId) -> StorageResult<usize> {
        let changed = self.conn.execute("DELETE FROM todos WHERE id = ?1;", [id])?;
        Ok(changed)
    }
}

fn parse_todo_row(row: &Row<'_>) -> StorageResult<Todo> {
    let id: TodoId = row.get("id")?;

    let title = row.get::<_, Option<String>>("title")?.ok_or_else(|| {
        StorageError::InvalidData(format!("todo {id} has NULL in todos.title"))
    })?;

    // Rows inserted outside the store may carry NULL when the default is bypassed.
    let is_completed = match row.get::<_, Option<i64>>("is_completed")? {
        None | Some(0) => false,
        Some(1) => true,
        Some(other) => {
            return Err(StorageError::InvalidData(format!(
                "invalid is_completed value `{other}` for todo {id}"
            )));
        }
    };

    Ok(Todo {
        id,
        title,
        description: row.get("description")?,
        is_completed,
    })
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
