use crate::db::models::{NewUser, User};
use crate::db::schema::SQLITE_INIT;
use crate::db::traits::UserStore;
use crate::error::OperationError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::debug;

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct UserStorage {
    pool: SqlitePool,
}

impl UserStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool for `database_url`, creating the database file if missing.
    ///
    /// With `init_schema` the bundled DDL runs before the handle is returned;
    /// if that fails the pool is closed again.
    pub async fn connect(database_url: &str, init_schema: bool) -> Result<Self, OperationError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        let storage = Self::new(pool);

        if init_schema {
            if let Err(e) = storage.init_schema().await {
                storage.pool.close().await;
                return Err(e);
            }
        }
        Ok(storage)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), OperationError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }
}

impl UserStore for UserStorage {
    async fn create_user(&self, user: NewUser) -> Result<User, OperationError> {
        let created = sqlx::query_as::<_, User>(
            r#"INSERT INTO users (name, age, email) VALUES (?, ?, ?)
               RETURNING id, name, age, email"#,
        )
        .bind(user.name)
        .bind(user.age)
        .bind(user.email)
        .fetch_one(&self.pool)
        .await?;
        debug!(id = created.id, email = %created.email, "user created");
        Ok(created)
    }

    async fn delete_user_by_email(&self, email: &str) -> Result<User, OperationError> {
        let deleted = sqlx::query_as::<_, User>(
            "DELETE FROM users WHERE email = ? RETURNING id, name, age, email",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| OperationError::RecordNotFound {
            email: email.to_string(),
        })?;
        debug!(id = deleted.id, email = %deleted.email, "user deleted");
        Ok(deleted)
    }

    async fn close(&self) {
        self.pool.close().await;
        debug!("sqlite pool closed");
    }
}
