//! Driving port for item request reads.

use async_trait::async_trait;

use crate::domain::{Error, ItemRequestDetails, RequestId, UserId};

/// Driving port for reading item requests with their answers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRequestQuery: Send + Sync {
    /// Requests made by `requestor_id`, newest first.
    async fn get_user_requests(
        &self,
        requestor_id: UserId,
    ) -> Result<Vec<ItemRequestDetails>, Error>;

    /// Every request, newest first.
    async fn get_all_requests(&self) -> Result<Vec<ItemRequestDetails>, Error>;

    /// One request by id.
    async fn get_request(&self, request_id: RequestId) -> Result<ItemRequestDetails, Error>;
}
