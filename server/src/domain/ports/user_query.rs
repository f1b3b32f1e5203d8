//! Driving port for user reads.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Driving port for reading users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserQuery: Send + Sync {
    /// Every user, ordered by id.
    async fn get_all_users(&self) -> Result<Vec<User>, Error>;

    /// One user by id.
    async fn get_user(&self, user_id: UserId) -> Result<User, Error>;
}
