//! Port for user persistence.

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// Another user already holds the e-mail address.
        DuplicateEmail { email: String } => "email {email} is already registered",
    }
}

/// Port for reading and writing users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user and return it with its assigned id.
    async fn insert(&self, user: &NewUser) -> Result<User, UserRepositoryError>;

    /// Find a user by id.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError>;

    /// List every user ordered by id.
    async fn list_all(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// Overwrite the name and e-mail of an existing user.
    async fn update(&self, user: &User) -> Result<User, UserRepositoryError>;

    /// Delete a user, returning whether a row was removed.
    async fn delete(&self, id: UserId) -> Result<bool, UserRepositoryError>;
}
