//! Port for item persistence and search.

use async_trait::async_trait;

use crate::domain::{Item, ItemId, ItemSearch, NewItem, RequestId, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by item repository adapters.
    pub enum ItemRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "item repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "item repository query failed: {message}",
    }
}

/// Port for reading and writing items.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Persist a new item and return it with its assigned id.
    async fn insert(&self, item: &NewItem) -> Result<Item, ItemRepositoryError>;

    /// Find an item by id.
    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, ItemRepositoryError>;

    /// List the items owned by `owner_id`, ordered by id.
    async fn list_by_owner(&self, owner_id: UserId) -> Result<Vec<Item>, ItemRepositoryError>;

    /// List available items whose name or description contains the search
    /// text, ignoring case, ordered by id.
    async fn search_available(&self, search: &ItemSearch)
    -> Result<Vec<Item>, ItemRepositoryError>;

    /// List items answering any of the given requests, ordered by id.
    async fn list_by_requests(
        &self,
        request_ids: &[RequestId],
    ) -> Result<Vec<Item>, ItemRepositoryError>;

    /// Overwrite the mutable fields of an existing item.
    async fn update(&self, item: &Item) -> Result<Item, ItemRepositoryError>;

    /// Delete an item, returning whether a row was removed.
    async fn delete(&self, id: ItemId) -> Result<bool, ItemRepositoryError>;
}
