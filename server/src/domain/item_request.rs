//! Open requests for items users wish to borrow.

use chrono::NaiveDateTime;

use super::{Item, ItemId, RequestId, UserId};

/// A persisted item request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRequest {
    /// Request identifier.
    pub id: RequestId,
    /// What the requestor is looking for.
    pub description: String,
    /// User who posted the request.
    pub requestor_id: UserId,
    /// Time the request was posted.
    pub created: NaiveDateTime,
}

/// Row to persist for a new item request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItemRequest {
    /// What the requestor is looking for.
    pub description: String,
    /// Posting user.
    pub requestor_id: UserId,
    /// Time the request was posted.
    pub created: NaiveDateTime,
}

/// Item listed in answer to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestAnswer {
    /// Answering item.
    pub id: ItemId,
    /// Item name.
    pub name: String,
    /// Item owner.
    pub owner_id: UserId,
}

impl From<&Item> for RequestAnswer {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            owner_id: item.owner_id,
        }
    }
}

/// A request together with the items answering it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRequestDetails {
    /// The request itself.
    pub request: ItemRequest,
    /// Items listed in answer.
    pub items: Vec<RequestAnswer>,
}

impl ItemRequestDetails {
    /// Attach the answers from `items` that reference `request`.
    #[must_use]
    pub fn collect(request: ItemRequest, items: &[Item]) -> Self {
        let answers = items
            .iter()
            .filter(|item| item.request_id == Some(request.id))
            .map(RequestAnswer::from)
            .collect();
        Self {
            request,
            items: answers,
        }
    }
}
