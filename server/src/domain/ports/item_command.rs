//! Driving port for item mutations.

use async_trait::async_trait;

use crate::domain::{Error, Item, ItemDraft, ItemId, ItemPatch, UserId};

/// Driving port for listing, editing and removing items.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemCommand: Send + Sync {
    /// List a new item owned by `owner_id`.
    async fn add_item(&self, owner_id: UserId, draft: ItemDraft) -> Result<Item, Error>;

    /// Apply `patch` to an item owned by `owner_id`.
    async fn update_item(
        &self,
        owner_id: UserId,
        item_id: ItemId,
        patch: ItemPatch,
    ) -> Result<Item, Error>;

    /// Remove an item owned by `owner_id`, returning it.
    async fn delete_item(&self, owner_id: UserId, item_id: ItemId) -> Result<Item, Error>;
}
