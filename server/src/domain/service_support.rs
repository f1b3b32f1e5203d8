//! Helpers shared by the domain services.

use chrono::NaiveDateTime;
use mockable::Clock;

use crate::domain::ports::{
    BookingRepositoryError, CommentRepositoryError, ItemRepository, ItemRepositoryError,
    ItemRequestRepositoryError, UserRepository, UserRepositoryError,
};
use crate::domain::{Error, Item, ItemId, User, UserId};

pub(crate) fn map_user_repository_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        UserRepositoryError::DuplicateEmail { email } => {
            Error::conflict(format!("User with email {email} already exists"))
        }
    }
}

pub(crate) fn map_item_repository_error(error: ItemRepositoryError) -> Error {
    match error {
        ItemRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("item repository unavailable: {message}"))
        }
        ItemRepositoryError::Query { message } => {
            Error::internal(format!("item repository error: {message}"))
        }
    }
}

pub(crate) fn map_booking_repository_error(error: BookingRepositoryError) -> Error {
    match error {
        BookingRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("booking repository unavailable: {message}"))
        }
        BookingRepositoryError::Query { message } => {
            Error::internal(format!("booking repository error: {message}"))
        }
    }
}

pub(crate) fn map_comment_repository_error(error: CommentRepositoryError) -> Error {
    match error {
        CommentRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("comment repository unavailable: {message}"))
        }
        CommentRepositoryError::Query { message } => {
            Error::internal(format!("comment repository error: {message}"))
        }
    }
}

pub(crate) fn map_request_repository_error(error: ItemRequestRepositoryError) -> Error {
    match error {
        ItemRequestRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("item request repository unavailable: {message}"))
        }
        ItemRequestRepositoryError::Query { message } => {
            Error::internal(format!("item request repository error: {message}"))
        }
    }
}

/// Load a user or fail with the not-found message clients rely on.
pub(crate) async fn require_user<U>(users: &U, user_id: UserId) -> Result<User, Error>
where
    U: UserRepository + ?Sized,
{
    users
        .find_by_id(user_id)
        .await
        .map_err(map_user_repository_error)?
        .ok_or_else(|| Error::not_found(format!("User with id {user_id} not found")))
}

/// Load an item or fail with the not-found message clients rely on.
pub(crate) async fn require_item<I>(items: &I, item_id: ItemId) -> Result<Item, Error>
where
    I: ItemRepository + ?Sized,
{
    items
        .find_by_id(item_id)
        .await
        .map_err(map_item_repository_error)?
        .ok_or_else(|| Error::not_found(format!("Item with id {item_id} not found")))
}

/// Current instant as a naive UTC timestamp.
pub(crate) fn now(clock: &dyn Clock) -> NaiveDateTime {
    clock.utc().naive_utc()
}
