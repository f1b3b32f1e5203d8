//! Item request routes.

use actix_web::{HttpRequest, HttpResponse, get, post, web};

use crate::error::GatewayResult;
use crate::sharer::SharerUserId;
use crate::state::GatewayState;
use crate::validation::{ItemRequestPayload, decode, positive_id};

/// `POST /requests`
#[post("/requests")]
pub async fn add_request(
    state: web::Data<GatewayState>,
    req: HttpRequest,
    _sharer: SharerUserId,
    body: web::Bytes,
) -> GatewayResult<HttpResponse> {
    decode::<ItemRequestPayload>(&body)?.check()?;
    state.client.forward(&req, Some(body)).await
}

/// `GET /requests`
#[get("/requests")]
pub async fn get_user_requests(
    state: web::Data<GatewayState>,
    req: HttpRequest,
    _sharer: SharerUserId,
) -> GatewayResult<HttpResponse> {
    state.client.forward(&req, None).await
}

/// `GET /requests/all`
#[get("/requests/all")]
pub async fn get_all_requests(
    state: web::Data<GatewayState>,
    req: HttpRequest,
) -> GatewayResult<HttpResponse> {
    state.client.forward(&req, None).await
}

/// `GET /requests/{requestId}`
#[get("/requests/{request_id}")]
pub async fn get_request(
    state: web::Data<GatewayState>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> GatewayResult<HttpResponse> {
    positive_id(path.into_inner(), "requestId")?;
    state.client.forward(&req, None).await
}
