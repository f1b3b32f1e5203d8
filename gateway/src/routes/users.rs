//! User routes.

use actix_web::{HttpRequest, HttpResponse, delete, get, patch, post, web};

use crate::error::GatewayResult;
use crate::state::GatewayState;
use crate::validation::{UserPayload, decode, positive_id};

/// `GET /users`
#[get("/users")]
pub async fn list_users(
    state: web::Data<GatewayState>,
    req: HttpRequest,
) -> GatewayResult<HttpResponse> {
    state.client.forward(&req, None).await
}

/// `GET /users/{userId}`
#[get("/users/{user_id}")]
pub async fn get_user(
    state: web::Data<GatewayState>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> GatewayResult<HttpResponse> {
    positive_id(path.into_inner(), "userId")?;
    state.client.forward(&req, None).await
}

/// `POST /users`
#[post("/users")]
pub async fn add_user(
    state: web::Data<GatewayState>,
    req: HttpRequest,
    body: web::Bytes,
) -> GatewayResult<HttpResponse> {
    decode::<UserPayload>(&body)?.check_new()?;
    state.client.forward(&req, Some(body)).await
}

/// `PATCH /users/{userId}`
#[patch("/users/{user_id}")]
pub async fn update_user(
    state: web::Data<GatewayState>,
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Bytes,
) -> GatewayResult<HttpResponse> {
    positive_id(path.into_inner(), "userId")?;
    decode::<UserPayload>(&body)?.check_update()?;
    state.client.forward(&req, Some(body)).await
}

/// `DELETE /users/{userId}`
#[delete("/users/{user_id}")]
pub async fn delete_user(
    state: web::Data<GatewayState>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> GatewayResult<HttpResponse> {
    positive_id(path.into_inner(), "userId")?;
    state.client.forward(&req, None).await
}
