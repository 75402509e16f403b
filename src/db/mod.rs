//! Database module: models, schema and the user store.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `traits.rs`: the narrow data-access interface used by the script
//! - `sqlite.rs`: sqlx-backed implementation of that interface

pub mod models;
pub mod schema;
pub mod sqlite;
pub mod traits;

pub use models::{NewUser, User};
pub use schema::SQLITE_INIT;
pub use sqlite::{SqlitePool, UserStorage};
pub use traits::UserStore;
