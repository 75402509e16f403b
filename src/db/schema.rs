//! SQL DDL for initializing the user storage.

/// SQLite schema with:
/// - `id` assigned by the database so every returned row carries a stable key
/// - `email` UNIQUE: deletes look users up by it, and a repeated insert of the
///   same email is rejected
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    age INTEGER NOT NULL,
    email TEXT NOT NULL UNIQUE
);
"#;
