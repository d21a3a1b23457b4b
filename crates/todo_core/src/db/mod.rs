//! SQLite storage bootstrap and the storage error surface.
//!
//! # Responsibility
//! - Open and configure the single SQLite connection used by the store.
//! - Ensure the `todos` table exists before any operation runs.
//! - Define `StorageError`, the only failure kind callers observe.
//!
//! # Invariants
//! - Schema preparation is idempotent: an existing table is left untouched.
//! - Core code must not read/write todos before schema preparation succeeds.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;

pub(crate) use open::configure;
pub use open::{open_db, open_db_in_memory};

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure reported by the todo storage layer.
///
/// Everything the backing store reports (constraint violations, I/O
/// failures, closed connections) arrives as `Sqlite`. The remaining
/// variants describe a connection or row the store cannot work with.
#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
    InvalidData(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing; schema not prepared")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted todo data: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::MissingRequiredTable(_)
            | Self::MissingRequiredColumn { .. }
            | Self::InvalidData(_) => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
