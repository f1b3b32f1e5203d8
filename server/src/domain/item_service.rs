//! Item listings: create, edit, remove, owner views and free-text search.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::ports::{
    BookingRepository, CommentRepository, ItemCommand, ItemQuery, ItemRepository,
    ItemRequestRepository, UserRepository,
};
use crate::domain::service_support::{
    map_booking_repository_error, map_comment_repository_error, map_item_repository_error,
    map_request_repository_error, now, require_item, require_user,
};
use crate::domain::{
    Booking, BookingNeighbours, Comment, Error, Item, ItemDetails, ItemDraft, ItemId, ItemPatch,
    ItemSearch, ItemValidationError, UserId,
};

/// Item service implementing [`ItemCommand`] and [`ItemQuery`].
#[derive(Clone)]
pub struct ItemService<I, U, B, C, R> {
    items: Arc<I>,
    users: Arc<U>,
    bookings: Arc<B>,
    comments: Arc<C>,
    requests: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<I, U, B, C, R> ItemService<I, U, B, C, R> {
    /// Create an item service over the given repositories and clock.
    pub fn new(
        items: Arc<I>,
        users: Arc<U>,
        bookings: Arc<B>,
        comments: Arc<C>,
        requests: Arc<R>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            items,
            users,
            bookings,
            comments,
            requests,
            clock,
        }
    }
}

fn invalid_item(error: &ItemValidationError) -> Error {
    Error::invalid_request(error.to_string())
}

fn owned(item: Item, owner_id: UserId) -> Result<Item, Error> {
    if item.is_owned_by(owner_id) {
        Ok(item)
    } else {
        Err(Error::forbidden(format!(
            "Only the owner can modify item {}",
            item.id
        )))
    }
}

fn group_by_item<T>(rows: Vec<T>, key: impl Fn(&T) -> ItemId) -> HashMap<ItemId, Vec<T>> {
    let mut grouped: HashMap<ItemId, Vec<T>> = HashMap::new();
    for row in rows {
        grouped.entry(key(&row)).or_default().push(row);
    }
    grouped
}

impl<I, U, B, C, R> ItemService<I, U, B, C, R>
where
    I: ItemRepository,
    U: UserRepository,
    B: BookingRepository,
    C: CommentRepository,
    R: ItemRequestRepository,
{
    async fn bookings_of(&self, item_ids: &[ItemId]) -> Result<Vec<Booking>, Error> {
        self.bookings
            .list_by_items(item_ids)
            .await
            .map_err(map_booking_repository_error)
    }

    async fn comments_of(&self, item_ids: &[ItemId]) -> Result<Vec<Comment>, Error> {
        self.comments
            .list_by_items(item_ids)
            .await
            .map_err(map_comment_repository_error)
    }

    async fn owner_item(&self, owner_id: UserId, item_id: ItemId) -> Result<Item, Error> {
        require_user(self.users.as_ref(), owner_id).await?;
        let item = require_item(self.items.as_ref(), item_id).await?;
        owned(item, owner_id)
    }
}

#[async_trait]
impl<I, U, B, C, R> ItemCommand for ItemService<I, U, B, C, R>
where
    I: ItemRepository,
    U: UserRepository,
    B: BookingRepository,
    C: CommentRepository,
    R: ItemRequestRepository,
{
    async fn add_item(&self, owner_id: UserId, draft: ItemDraft) -> Result<Item, Error> {
        require_user(self.users.as_ref(), owner_id).await?;
        let new_item = draft
            .into_new_item(owner_id)
            .map_err(|err| invalid_item(&err))?;
        if let Some(request_id) = new_item.request_id {
            self.requests
                .find_by_id(request_id)
                .await
                .map_err(map_request_repository_error)?
                .ok_or_else(|| Error::not_found(format!("Request with id {request_id} not found")))?;
        }
        let item = self
            .items
            .insert(&new_item)
            .await
            .map_err(map_item_repository_error)?;
        info!(item_id = %item.id, owner_id = %owner_id, "item listed");
        Ok(item)
    }

    async fn update_item(
        &self,
        owner_id: UserId,
        item_id: ItemId,
        patch: ItemPatch,
    ) -> Result<Item, Error> {
        patch.validate().map_err(|err| invalid_item(&err))?;
        let current = self.owner_item(owner_id, item_id).await?;
        let updated = self
            .items
            .update(&patch.apply(current))
            .await
            .map_err(map_item_repository_error)?;
        info!(item_id = %item_id, "item updated");
        Ok(updated)
    }

    async fn delete_item(&self, owner_id: UserId, item_id: ItemId) -> Result<Item, Error> {
        let item = self.owner_item(owner_id, item_id).await?;
        let removed = self
            .items
            .delete(item_id)
            .await
            .map_err(map_item_repository_error)?;
        if !removed {
            return Err(Error::not_found(format!("Item with id {item_id} not found")));
        }
        info!(item_id = %item_id, "item deleted");
        Ok(item)
    }
}

#[async_trait]
impl<I, U, B, C, R> ItemQuery for ItemService<I, U, B, C, R>
where
    I: ItemRepository,
    U: UserRepository,
    B: BookingRepository,
    C: CommentRepository,
    R: ItemRequestRepository,
{
    async fn get_item(&self, viewer_id: UserId, item_id: ItemId) -> Result<ItemDetails, Error> {
        let item = require_item(self.items.as_ref(), item_id).await?;
        let comments = self.comments_of(&[item_id]).await?;
        let neighbours = if item.is_owned_by(viewer_id) {
            let bookings = self.bookings_of(&[item_id]).await?;
            BookingNeighbours::around(&bookings, now(self.clock.as_ref()))
        } else {
            BookingNeighbours::default()
        };
        Ok(ItemDetails {
            item,
            last_booking: neighbours.last,
            next_booking: neighbours.next,
            comments,
        })
    }

    async fn get_user_items(&self, owner_id: UserId) -> Result<Vec<ItemDetails>, Error> {
        require_user(self.users.as_ref(), owner_id).await?;
        let items = self
            .items
            .list_by_owner(owner_id)
            .await
            .map_err(map_item_repository_error)?;
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let item_ids: Vec<ItemId> = items.iter().map(|item| item.id).collect();
        let mut bookings = group_by_item(self.bookings_of(&item_ids).await?, |b| b.item.id);
        let mut comments = group_by_item(self.comments_of(&item_ids).await?, |c| c.item_id);
        let now = now(self.clock.as_ref());
        Ok(items
            .into_iter()
            .map(|item| {
                let neighbours = BookingNeighbours::around(
                    &bookings.remove(&item.id).unwrap_or_default(),
                    now,
                );
                let comments = comments.remove(&item.id).unwrap_or_default();
                ItemDetails {
                    item,
                    last_booking: neighbours.last,
                    next_booking: neighbours.next,
                    comments,
                }
            })
            .collect())
    }

    async fn search_items(&self, text: String) -> Result<Vec<Item>, Error> {
        let Some(search) = ItemSearch::parse(&text) else {
            return Ok(Vec::new());
        };
        self.items
            .search_available(&search)
            .await
            .map_err(map_item_repository_error)
    }
}

#[cfg(test)]
#[path = "item_service_tests.rs"]
mod tests;
