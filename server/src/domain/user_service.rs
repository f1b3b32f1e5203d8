//! User registration and profile maintenance.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{UserCommand, UserQuery, UserRepository};
use crate::domain::service_support::{map_user_repository_error, require_user};
use crate::domain::{Error, NewUser, User, UserId, UserPatch};

/// User service implementing [`UserCommand`] and [`UserQuery`].
#[derive(Clone)]
pub struct UserService<U> {
    users: Arc<U>,
}

impl<U> UserService<U> {
    /// Create a user service over the given repository.
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<U> UserCommand for UserService<U>
where
    U: UserRepository,
{
    async fn add_user(&self, user: NewUser) -> Result<User, Error> {
        let created = self
            .users
            .insert(&user)
            .await
            .map_err(map_user_repository_error)?;
        info!(user_id = %created.id, "user registered");
        Ok(created)
    }

    async fn update_user(&self, user_id: UserId, patch: UserPatch) -> Result<User, Error> {
        let current = require_user(self.users.as_ref(), user_id).await?;
        let updated = self
            .users
            .update(&patch.apply(current))
            .await
            .map_err(map_user_repository_error)?;
        info!(user_id = %user_id, "user updated");
        Ok(updated)
    }

    async fn delete_user(&self, user_id: UserId) -> Result<User, Error> {
        let user = require_user(self.users.as_ref(), user_id).await?;
        let removed = self
            .users
            .delete(user_id)
            .await
            .map_err(map_user_repository_error)?;
        if !removed {
            return Err(Error::not_found(format!("User with id {user_id} not found")));
        }
        info!(user_id = %user_id, "user deleted");
        Ok(user)
    }
}

#[async_trait]
impl<U> UserQuery for UserService<U>
where
    U: UserRepository,
{
    async fn get_all_users(&self) -> Result<Vec<User>, Error> {
        self.users
            .list_all()
            .await
            .map_err(map_user_repository_error)
    }

    async fn get_user(&self, user_id: UserId) -> Result<User, Error> {
        require_user(self.users.as_ref(), user_id).await
    }
}
