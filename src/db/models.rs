use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub email: String,
}

/// Insert payload; the id is assigned by the database.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub age: i64,
    pub email: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, age: i64, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            email: email.into(),
        }
    }
}
