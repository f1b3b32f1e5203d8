//! Item and comment routes.
//!
//! Search does not require the sharer header; it is forwarded when present.

use actix_web::{HttpRequest, HttpResponse, delete, get, patch, post, web};

use crate::error::GatewayResult;
use crate::sharer::SharerUserId;
use crate::state::GatewayState;
use crate::validation::{CommentPayload, ItemPayload, decode, positive_id};

/// `GET /items/search?text=`
#[get("/items/search")]
pub async fn search_items(
    state: web::Data<GatewayState>,
    req: HttpRequest,
) -> GatewayResult<HttpResponse> {
    state.client.forward(&req, None).await
}

/// `POST /items/{itemId}/comment`
#[post("/items/{item_id}/comment")]
pub async fn post_comment(
    state: web::Data<GatewayState>,
    req: HttpRequest,
    _sharer: SharerUserId,
    path: web::Path<i64>,
    body: web::Bytes,
) -> GatewayResult<HttpResponse> {
    positive_id(path.into_inner(), "itemId")?;
    decode::<CommentPayload>(&body)?.check()?;
    state.client.forward(&req, Some(body)).await
}

/// `GET /items/{itemId}`
#[get("/items/{item_id}")]
pub async fn get_item(
    state: web::Data<GatewayState>,
    req: HttpRequest,
    _sharer: SharerUserId,
    path: web::Path<i64>,
) -> GatewayResult<HttpResponse> {
    positive_id(path.into_inner(), "itemId")?;
    state.client.forward(&req, None).await
}

/// `GET /items`
#[get("/items")]
pub async fn get_user_items(
    state: web::Data<GatewayState>,
    req: HttpRequest,
    _sharer: SharerUserId,
) -> GatewayResult<HttpResponse> {
    state.client.forward(&req, None).await
}

/// `POST /items`
#[post("/items")]
pub async fn add_item(
    state: web::Data<GatewayState>,
    req: HttpRequest,
    _sharer: SharerUserId,
    body: web::Bytes,
) -> GatewayResult<HttpResponse> {
    decode::<ItemPayload>(&body)?.check_new()?;
    state.client.forward(&req, Some(body)).await
}

/// `PATCH /items/{itemId}`
#[patch("/items/{item_id}")]
pub async fn update_item(
    state: web::Data<GatewayState>,
    req: HttpRequest,
    _sharer: SharerUserId,
    path: web::Path<i64>,
    body: web::Bytes,
) -> GatewayResult<HttpResponse> {
    positive_id(path.into_inner(), "itemId")?;
    decode::<ItemPayload>(&body)?;
    state.client.forward(&req, Some(body)).await
}

/// `DELETE /items/{itemId}`
#[delete("/items/{item_id}")]
pub async fn delete_item(
    state: web::Data<GatewayState>,
    req: HttpRequest,
    _sharer: SharerUserId,
    path: web::Path<i64>,
) -> GatewayResult<HttpResponse> {
    positive_id(path.into_inner(), "itemId")?;
    state.client.forward(&req, None).await
}
