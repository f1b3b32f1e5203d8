//! Item HTTP handlers.
//!
//! ```text
//! GET    /items/{itemId}
//! GET    /items
//! GET    /items/search?text=drill
//! POST   /items                      {"name":"Drill","description":"...","available":true}
//! PATCH  /items/{itemId}             {"available":false}
//! DELETE /items/{itemId}
//! POST   /items/{itemId}/comment     {"text":"Great!"}
//! ```

use actix_web::{delete, get, patch, post, web};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{
    BookingSnapshot, Comment, Error, Item, ItemDetails, ItemDraft, ItemId, ItemPatch, RequestId,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::sharer::SharerUserId;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, positive_id, require, require_text};

/// Request payload for listing an item.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewItemBody {
    /// Display name.
    #[schema(example = "Cordless drill")]
    pub name: Option<String>,
    /// Free-text description.
    #[schema(example = "18V, two batteries")]
    pub description: Option<String>,
    /// Whether the item can be booked.
    pub available: Option<bool>,
    /// Request this item answers.
    pub request_id: Option<i64>,
}

/// Partial update for an item.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatchBody {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement availability.
    pub available: Option<bool>,
}

/// Request payload for a comment.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct CommentRequestBody {
    /// Comment body.
    #[schema(example = "Great!")]
    pub text: Option<String>,
}

/// Booking summary shown to an item's owner.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummaryBody {
    /// Booking identifier.
    pub id: i64,
    /// Requesting user.
    pub booker_id: i64,
    /// Start of the rental window.
    pub start: NaiveDateTime,
    /// End of the rental window.
    pub end: NaiveDateTime,
}

impl From<BookingSnapshot> for BookingSummaryBody {
    fn from(value: BookingSnapshot) -> Self {
        Self {
            id: value.id.get(),
            booker_id: value.booker_id.get(),
            start: value.start,
            end: value.end,
        }
    }
}

/// Comment response payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentBody {
    /// Comment identifier.
    pub id: i64,
    /// Comment body.
    pub text: String,
    /// Name of the writing user.
    pub author_name: String,
    /// Time the comment was accepted.
    pub created: NaiveDateTime,
}

impl From<Comment> for CommentBody {
    fn from(value: Comment) -> Self {
        Self {
            id: value.id.get(),
            text: value.text,
            author_name: value.author.name,
            created: value.created,
        }
    }
}

/// Item response payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemBody {
    /// Item identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Whether the item can be booked.
    pub available: bool,
    /// Listing user.
    pub owner_id: i64,
    /// Request this item answers, if any.
    pub request_id: Option<i64>,
    /// Most recent booking; owner only.
    pub last_booking: Option<BookingSummaryBody>,
    /// Upcoming booking; owner only.
    pub next_booking: Option<BookingSummaryBody>,
    /// Comments in creation order.
    pub comments: Vec<CommentBody>,
}

impl From<Item> for ItemBody {
    fn from(value: Item) -> Self {
        Self {
            id: value.id.get(),
            name: value.name,
            description: value.description,
            available: value.available,
            owner_id: value.owner_id.get(),
            request_id: value.request_id.map(RequestId::get),
            last_booking: None,
            next_booking: None,
            comments: Vec::new(),
        }
    }
}

impl From<ItemDetails> for ItemBody {
    fn from(value: ItemDetails) -> Self {
        Self {
            last_booking: value.last_booking.map(BookingSummaryBody::from),
            next_booking: value.next_booking.map(BookingSummaryBody::from),
            comments: value.comments.into_iter().map(CommentBody::from).collect(),
            ..Self::from(value.item)
        }
    }
}

/// Free-text search over available items.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive text matched against name and description.
    pub text: Option<String>,
}

fn parse_item_draft(payload: NewItemBody) -> Result<ItemDraft, Error> {
    let request_id = payload
        .request_id
        .map(|id| positive_id(id, FieldName::new("requestId")).map(RequestId::new))
        .transpose()?;
    Ok(ItemDraft {
        name: require_text(payload.name, FieldName::new("name"))?,
        description: require_text(payload.description, FieldName::new("description"))?,
        available: require(payload.available, FieldName::new("available"))?,
        request_id,
    })
}

fn item_id(path: web::Path<i64>) -> Result<ItemId, Error> {
    positive_id(path.into_inner(), FieldName::new("itemId")).map(ItemId::new)
}

/// Available items mentioning the search text.
#[utoipa::path(
    get,
    path = "/items/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching available items", body = [ItemBody])
    ),
    tags = ["items"],
    operation_id = "searchItems"
)]
#[get("/items/search")]
pub async fn search_items(
    state: web::Data<HttpState>,
    query: web::Query<SearchQuery>,
) -> ApiResult<web::Json<Vec<ItemBody>>> {
    let text = query.into_inner().text.unwrap_or_default();
    let items = state.items_query.search_items(text).await?;
    Ok(web::Json(items.into_iter().map(ItemBody::from).collect()))
}

/// Fetch an item; booking summaries are shown to its owner only.
#[utoipa::path(
    get,
    path = "/items/{itemId}",
    params(
        ("itemId" = i64, Path, description = "Item identifier"),
        ("X-Sharer-User-Id" = i64, Header, description = "Viewer")
    ),
    responses(
        (status = 200, description = "Item", body = ItemBody),
        (status = 404, description = "Item not found", body = Error)
    ),
    tags = ["items"],
    operation_id = "getItem"
)]
#[get("/items/{item_id}")]
pub async fn get_item(
    state: web::Data<HttpState>,
    sharer: SharerUserId,
    path: web::Path<i64>,
) -> ApiResult<web::Json<ItemBody>> {
    let details = state
        .items_query
        .get_item(sharer.user_id(), item_id(path)?)
        .await?;
    Ok(web::Json(details.into()))
}

/// Items owned by the caller.
#[utoipa::path(
    get,
    path = "/items",
    params(("X-Sharer-User-Id" = i64, Header, description = "Owner")),
    responses(
        (status = 200, description = "Owned items", body = [ItemBody]),
        (status = 404, description = "User not found", body = Error)
    ),
    tags = ["items"],
    operation_id = "getUserItems"
)]
#[get("/items")]
pub async fn get_user_items(
    state: web::Data<HttpState>,
    sharer: SharerUserId,
) -> ApiResult<web::Json<Vec<ItemBody>>> {
    let items = state.items_query.get_user_items(sharer.user_id()).await?;
    Ok(web::Json(items.into_iter().map(ItemBody::from).collect()))
}

/// List a new item.
#[utoipa::path(
    post,
    path = "/items",
    request_body = NewItemBody,
    params(("X-Sharer-User-Id" = i64, Header, description = "Owner")),
    responses(
        (status = 200, description = "Item listed", body = ItemBody),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "User or request not found", body = Error)
    ),
    tags = ["items"],
    operation_id = "addItem"
)]
#[post("/items")]
pub async fn add_item(
    state: web::Data<HttpState>,
    sharer: SharerUserId,
    payload: web::Json<NewItemBody>,
) -> ApiResult<web::Json<ItemBody>> {
    let draft = parse_item_draft(payload.into_inner())?;
    let item = state.items.add_item(sharer.user_id(), draft).await?;
    Ok(web::Json(item.into()))
}

/// Update an item owned by the caller.
#[utoipa::path(
    patch,
    path = "/items/{itemId}",
    request_body = ItemPatchBody,
    params(
        ("itemId" = i64, Path, description = "Item identifier"),
        ("X-Sharer-User-Id" = i64, Header, description = "Owner")
    ),
    responses(
        (status = 200, description = "Item updated", body = ItemBody),
        (status = 400, description = "Invalid request", body = Error),
        (status = 403, description = "Caller does not own the item", body = Error),
        (status = 404, description = "User or item not found", body = Error)
    ),
    tags = ["items"],
    operation_id = "updateItem"
)]
#[patch("/items/{item_id}")]
pub async fn update_item(
    state: web::Data<HttpState>,
    sharer: SharerUserId,
    path: web::Path<i64>,
    payload: web::Json<ItemPatchBody>,
) -> ApiResult<web::Json<ItemBody>> {
    let ItemPatchBody {
        name,
        description,
        available,
    } = payload.into_inner();
    let patch = ItemPatch {
        name,
        description,
        available,
    };
    let item = state
        .items
        .update_item(sharer.user_id(), item_id(path)?, patch)
        .await?;
    Ok(web::Json(item.into()))
}

/// Remove an item owned by the caller.
#[utoipa::path(
    delete,
    path = "/items/{itemId}",
    params(
        ("itemId" = i64, Path, description = "Item identifier"),
        ("X-Sharer-User-Id" = i64, Header, description = "Owner")
    ),
    responses(
        (status = 200, description = "Removed item", body = ItemBody),
        (status = 403, description = "Caller does not own the item", body = Error),
        (status = 404, description = "User or item not found", body = Error)
    ),
    tags = ["items"],
    operation_id = "deleteItem"
)]
#[delete("/items/{item_id}")]
pub async fn delete_item(
    state: web::Data<HttpState>,
    sharer: SharerUserId,
    path: web::Path<i64>,
) -> ApiResult<web::Json<ItemBody>> {
    let item = state
        .items
        .delete_item(sharer.user_id(), item_id(path)?)
        .await?;
    Ok(web::Json(item.into()))
}

/// Comment on an item after a completed rental.
#[utoipa::path(
    post,
    path = "/items/{itemId}/comment",
    request_body = CommentRequestBody,
    params(
        ("itemId" = i64, Path, description = "Item identifier"),
        ("X-Sharer-User-Id" = i64, Header, description = "Booker")
    ),
    responses(
        (status = 200, description = "Comment stored", body = CommentBody),
        (status = 400, description = "Rental not approved, not ended or not the caller's", body = Error),
        (status = 404, description = "No booking for the item", body = Error)
    ),
    tags = ["items"],
    operation_id = "postComment"
)]
#[post("/items/{item_id}/comment")]
pub async fn post_comment(
    state: web::Data<HttpState>,
    sharer: SharerUserId,
    path: web::Path<i64>,
    payload: web::Json<CommentRequestBody>,
) -> ApiResult<web::Json<CommentBody>> {
    let text = require_text(payload.into_inner().text, FieldName::new("text"))?;
    let comment = state
        .comments
        .post_comment(sharer.user_id(), item_id(path)?, text)
        .await?;
    Ok(web::Json(comment.into()))
}
