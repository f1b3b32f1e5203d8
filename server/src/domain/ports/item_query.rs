//! Driving port for item reads.

use async_trait::async_trait;

use crate::domain::{Error, Item, ItemDetails, ItemId, UserId};

/// Driving port for reading items.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemQuery: Send + Sync {
    /// Fetch an item as seen by `viewer_id`.
    async fn get_item(&self, viewer_id: UserId, item_id: ItemId) -> Result<ItemDetails, Error>;

    /// Items owned by `owner_id`, each with owner details.
    async fn get_user_items(&self, owner_id: UserId) -> Result<Vec<ItemDetails>, Error>;

    /// Available items mentioning `text`; blank text yields nothing.
    async fn search_items(&self, text: String) -> Result<Vec<Item>, Error>;
}
