//! Item requests and the items listed in answer to them.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::ports::{
    ItemRepository, ItemRequestCommand, ItemRequestQuery, ItemRequestRepository, UserRepository,
};
use crate::domain::service_support::{
    map_item_repository_error, map_request_repository_error, now, require_user,
};
use crate::domain::{
    Error, ItemRequest, ItemRequestDetails, NewItemRequest, RequestId, UserId,
};

/// Request service implementing [`ItemRequestCommand`] and [`ItemRequestQuery`].
#[derive(Clone)]
pub struct ItemRequestService<R, I, U> {
    requests: Arc<R>,
    items: Arc<I>,
    users: Arc<U>,
    clock: Arc<dyn Clock>,
}

impl<R, I, U> ItemRequestService<R, I, U> {
    /// Create a request service over the given repositories and clock.
    pub fn new(requests: Arc<R>, items: Arc<I>, users: Arc<U>, clock: Arc<dyn Clock>) -> Self {
        Self {
            requests,
            items,
            users,
            clock,
        }
    }
}

impl<R, I, U> ItemRequestService<R, I, U>
where
    I: ItemRepository,
{
    async fn with_answers(
        &self,
        requests: Vec<ItemRequest>,
    ) -> Result<Vec<ItemRequestDetails>, Error> {
        if requests.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<RequestId> = requests.iter().map(|request| request.id).collect();
        let items = self
            .items
            .list_by_requests(&ids)
            .await
            .map_err(map_item_repository_error)?;
        Ok(requests
            .into_iter()
            .map(|request| ItemRequestDetails::collect(request, &items))
            .collect())
    }
}

#[async_trait]
impl<R, I, U> ItemRequestCommand for ItemRequestService<R, I, U>
where
    R: ItemRequestRepository,
    I: ItemRepository,
    U: UserRepository,
{
    async fn add_request(
        &self,
        requestor_id: UserId,
        description: String,
    ) -> Result<ItemRequest, Error> {
        if description.trim().is_empty() {
            return Err(Error::invalid_request(
                "Request description must not be blank",
            ));
        }
        require_user(self.users.as_ref(), requestor_id).await?;
        let request = self
            .requests
            .insert(&NewItemRequest {
                description,
                requestor_id,
                created: now(self.clock.as_ref()),
            })
            .await
            .map_err(map_request_repository_error)?;
        info!(request_id = %request.id, requestor_id = %requestor_id, "item request posted");
        Ok(request)
    }
}

#[async_trait]
impl<R, I, U> ItemRequestQuery for ItemRequestService<R, I, U>
where
    R: ItemRequestRepository,
    I: ItemRepository,
    U: UserRepository,
{
    async fn get_user_requests(
        &self,
        requestor_id: UserId,
    ) -> Result<Vec<ItemRequestDetails>, Error> {
        require_user(self.users.as_ref(), requestor_id).await?;
        let requests = self
            .requests
            .list_by_requestor(requestor_id)
            .await
            .map_err(map_request_repository_error)?;
        self.with_answers(requests).await
    }

    async fn get_all_requests(&self) -> Result<Vec<ItemRequestDetails>, Error> {
        let requests = self
            .requests
            .list_all()
            .await
            .map_err(map_request_repository_error)?;
        self.with_answers(requests).await
    }

    async fn get_request(&self, request_id: RequestId) -> Result<ItemRequestDetails, Error> {
        let request = self
            .requests
            .find_by_id(request_id)
            .await
            .map_err(map_request_repository_error)?
            .ok_or_else(|| Error::not_found(format!("Request with id {request_id} not found")))?;
        let items = self
            .items
            .list_by_requests(&[request_id])
            .await
            .map_err(map_item_repository_error)?;
        Ok(ItemRequestDetails::collect(request, &items))
    }
}
