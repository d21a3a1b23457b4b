//! Todo store facade.
//!
//! # Responsibility
//! - Own the single SQLite connection backing the `todos` table.
//! - Expose add/list/get/update/delete as single-statement operations.
//!
//! # Invariants
//! - The schema is prepared before a `TodoStore` value exists.
//! - Every operation completes with a value or a `StorageError`; none retry.
//! - Update and delete report not-found as an affected count of `0`.
//! - Statements run one at a time on the owned connection. Share the store
//!   across threads behind a `Mutex`; there are no multi-statement
//!   transactions, so read-then-write sequences are not atomic.

use crate::db::{configure, open_db, open_db_in_memory, StorageError, StorageResult};
use crate::model::todo::{Todo, TodoId};
use crate::repo::todo_repo::{SqliteTodoRepository, TodoRepository};
use log::{debug, error, info};
use rusqlite::Connection;
use std::path::Path;

/// Handle to the todo database, constructed once at startup.
#[derive(Debug)]
pub struct TodoStore {
    conn: Connection,
}

impl TodoStore {
    /// Opens the database file at `path`, creating file and table if absent.
    ///
    /// # Errors
    /// Returns `StorageError` when the file cannot be opened or the schema
    /// cannot be created. Callers should treat this as fatal at startup.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        Ok(Self {
            conn: open_db(path)?,
        })
    }

    /// Opens a private in-memory store.
    pub fn open_in_memory() -> StorageResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }

    /// Adopts an already-open connection, applying the same pragmas and
    /// schema preparation as `open`.
    ///
    /// Rejects connections holding a `todos` table without the store's
    /// columns.
    pub fn from_connection(conn: Connection) -> StorageResult<Self> {
        configure(&conn)?;
        SqliteTodoRepository::try_new(&conn)?;
        Ok(Self { conn })
    }

    /// Inserts a todo with `is_completed = false` and returns its new id.
    ///
    /// `title` is required by the table; passing `None` fails with the
    /// store's NOT NULL constraint and leaves no row behind.
    pub fn add(&self, title: Option<&str>, description: Option<&str>) -> StorageResult<TodoId> {
        let result = self.repo().insert_todo(title, description);
        match &result {
            Ok(id) => debug!("event=todo_add module=store status=ok id={id}"),
            Err(err) => error!("event=todo_add module=store status=error error={err}"),
        }
        result
    }

    /// Returns every stored todo in the store's natural order.
    pub fn get_all_todos(&self) -> StorageResult<Vec<Todo>> {
        let result = self.repo().list_todos();
        match &result {
            Ok(todos) => debug!("event=todo_list module=store status=ok count={}", todos.len()),
            Err(err) => error!("event=todo_list module=store status=error error={err}"),
        }
        result
    }

    /// Returns the todo with `id`, or `None` when no such row exists.
    pub fn get(&self, id: TodoId) -> StorageResult<Option<Todo>> {
        let result = self.repo().get_todo(id);
        match &result {
            Ok(found) => debug!(
                "event=todo_get module=store status=ok id={id} found={}",
                found.is_some()
            ),
            Err(err) => error!("event=todo_get module=store status=error id={id} error={err}"),
        }
        result
    }

    /// Overwrites title, description and completion flag of todo `id`.
    ///
    /// This is a full replacement, not a patch. Returns `1` when the row
    /// existed and `0` otherwise. Concurrent updates to the same id are
    /// last-write-wins.
    pub fn update(
        &self,
        id: TodoId,
        title: Option<&str>,
        description: Option<&str>,
        is_completed: bool,
    ) -> StorageResult<usize> {
        let result = self
            .repo()
            .update_todo(id, title, description, is_completed);
        log_write("todo_update", id, &result);
        result
    }

    /// Deletes todo `id`. Returns `1` when a row was removed and `0` otherwise.
    pub fn delete(&self, id: TodoId) -> StorageResult<usize> {
        let result = self.repo().delete_todo(id);
        log_write("todo_delete", id, &result);
        result
    }

    /// Closes the underlying connection.
    ///
    /// Dropping the store also closes it; this variant surfaces close errors.
    pub fn close(self) -> StorageResult<()> {
        match self.conn.close() {
            Ok(()) => {
                info!("event=db_close module=store status=ok");
                Ok(())
            }
            Err((_conn, err)) => {
                error!("event=db_close module=store status=error error={err}");
                Err(StorageError::from(err))
            }
        }
    }

    fn repo(&self) -> SqliteTodoRepository<'_> {
        SqliteTodoRepository::new_unchecked(&self.conn)
    }
}

fn log_write(event: &str, id: TodoId, result: &StorageResult<usize>) {
    match result {
        Ok(affected) => {
            debug!("event={event} module=store status=ok id={id} affected={affected}")
        }
        Err(err) => error!("event={event} module=store status=error id={id} error={err}"),
    }
}
