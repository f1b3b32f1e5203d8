//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User, UserId, UserPatch};

/// Driving port for registering, editing and removing users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserCommand: Send + Sync {
    /// Register a user; the e-mail must be unused.
    async fn add_user(&self, user: NewUser) -> Result<User, Error>;

    /// Apply `patch` to an existing user.
    async fn update_user(&self, user_id: UserId, patch: UserPatch) -> Result<User, Error>;

    /// Remove a user, returning it.
    async fn delete_user(&self, user_id: UserId) -> Result<User, Error>;
}
