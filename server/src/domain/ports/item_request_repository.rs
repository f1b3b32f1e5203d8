//! Port for item request persistence.

use async_trait::async_trait;

use crate::domain::{ItemRequest, NewItemRequest, RequestId, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by item request repository adapters.
    pub enum ItemRequestRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "item request repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "item request repository query failed: {message}",
    }
}

/// Port for reading and writing item requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRequestRepository: Send + Sync {
    /// Persist a request and return it with its assigned id.
    async fn insert(
        &self,
        request: &NewItemRequest,
    ) -> Result<ItemRequest, ItemRequestRepositoryError>;

    /// Find a request by id.
    async fn find_by_id(
        &self,
        id: RequestId,
    ) -> Result<Option<ItemRequest>, ItemRequestRepositoryError>;

    /// Requests made by `requestor_id`, newest first.
    async fn list_by_requestor(
        &self,
        requestor_id: UserId,
    ) -> Result<Vec<ItemRequest>, ItemRequestRepositoryError>;

    /// Every request, newest first.
    async fn list_all(&self) -> Result<Vec<ItemRequest>, ItemRequestRepositoryError>;
}
