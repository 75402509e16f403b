use crate::db::models::{NewUser, User};
use crate::error::OperationError;
use std::future::Future;

/// Data-access interface the script runs against.
pub trait UserStore: Send + Sync {
    fn create_user(
        &self,
        user: NewUser,
    ) -> impl Future<Output = Result<User, OperationError>> + Send;

    /// Delete the user with the given email and return the removed row.
    /// Fails with [`OperationError::RecordNotFound`] when nothing matches.
    fn delete_user_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<User, OperationError>> + Send;

    /// Release the underlying connection(s).
    fn close(&self) -> impl Future<Output = ()> + Send;
}
