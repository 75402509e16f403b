pub mod config;
pub mod db;
pub mod error;
pub mod script;

pub use db::{NewUser, User, UserStorage, UserStore};
pub use error::OperationError;
