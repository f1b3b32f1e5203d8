//! Driving port for creating item requests.

use async_trait::async_trait;

use crate::domain::{Error, ItemRequest, UserId};

/// Driving port for posting item requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRequestCommand: Send + Sync {
    /// Record a request by `requestor_id` stamped with the current time.
    async fn add_request(
        &self,
        requestor_id: UserId,
        description: String,
    ) -> Result<ItemRequest, Error>;
}
