use rusqlite::Connection;
use todo_core::db::schema::{ensure_schema, table_columns};
use todo_core::db::{open_db, open_db_in_memory};
use todo_core::{SqliteTodoRepository, StorageError, TodoStore};

#[test]
fn open_db_in_memory_creates_todos_table() {
    let conn = open_db_in_memory().expect("in-memory db should open");

    assert_table_exists(&conn, "todos");
    assert_eq!(
        table_columns(&conn, "todos").expect("column listing should succeed"),
        vec!["id", "title", "description", "is_completed"]
    );
}

#[test]
fn open_db_creates_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = dir.path().join("todos.db");
    assert!(!path.exists());

    let conn = open_db(&path).expect("first open should create the file");
    assert!(path.exists());
    assert_table_exists(&conn, "todos");
}

#[test]
fn reopening_keeps_existing_rows() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = dir.path().join("todos.db");

    let store = TodoStore::open(&path).expect("first open should succeed");
    let id = store
        .add(Some("persisted"), None)
        .expect("add should succeed");
    store.close().expect("close should succeed");

    let reopened = TodoStore::open(&path).expect("reopen should succeed");
    let todos = reopened.get_all_todos().expect("list should succeed");
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].id, id);
    assert_eq!(todos[0].title, "persisted");
}

#[test]
fn ensure_schema_is_idempotent() {
    let conn = open_db_in_memory().expect("in-memory db should open");
    conn.execute("INSERT INTO todos (title) VALUES ('keep me');", [])
        .expect("seed insert should succeed");

    ensure_schema(&conn).expect("second schema pass should succeed");
    ensure_schema(&conn).expect("third schema pass should succeed");

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM todos;", [], |row| row.get(0))
        .expect("count should succeed");
    assert_eq!(count, 1);
}

#[test]
fn open_db_fails_when_path_is_a_directory() {
    let dir = tempfile::tempdir().expect("temp dir should be created");

    let err = open_db(dir.path()).expect_err("a directory is not a database file");
    assert!(matches!(err, StorageError::Sqlite(_)));
}

#[test]
fn list_fails_when_table_is_dropped_underneath_the_store() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = dir.path().join("todos.db");

    let store = TodoStore::open(&path).expect("store should open");
    store
        .add(Some("about to vanish"), None)
        .expect("add should succeed");

    let other = Connection::open(&path).expect("second connection should open");
    other
        .execute_batch("DROP TABLE todos;")
        .expect("drop through second connection should succeed");
    drop(other);

    let err = store
        .get_all_todos()
        .expect_err("listing a dropped table should fail");
    assert!(matches!(err, StorageError::Sqlite(_)));
}

#[test]
fn repository_rejects_connection_without_todos_table() {
    let conn = Connection::open_in_memory().expect("in-memory db should open");

    let result = SqliteTodoRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(StorageError::MissingRequiredTable("todos"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().expect("in-memory db should open");
    conn.execute_batch(
        "CREATE TABLE todos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT
        );",
    )
    .expect("legacy table should be created");

    let result = SqliteTodoRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(StorageError::MissingRequiredColumn {
            table: "todos",
            column: "is_completed"
        })
    ));
}

#[test]
fn store_from_connection_prepares_fresh_connection() {
    let conn = Connection::open_in_memory().expect("in-memory db should open");

    let store = TodoStore::from_connection(conn).expect("adopting should prepare the schema");
    assert_eq!(
        store
            .add(Some("adopted"), None)
            .expect("add should succeed"),
        1
    );
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .expect("sqlite_master query should succeed");
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
