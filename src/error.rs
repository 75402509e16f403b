use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

/// Any failure raised while running the script against the user store.
///
/// The runner does not distinguish between kinds; the message is reported as-is.
#[derive(Debug, ThisError)]
pub enum OperationError {
    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("No user record found for email {email}")]
    RecordNotFound { email: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl OperationError {
    /// True when the database rejected a write because of a UNIQUE constraint.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            OperationError::Database(SqlxError::Database(db_err)) => db_err.is_unique_violation(),
            _ => false,
        }
    }
}
