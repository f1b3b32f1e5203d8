//! Booking routes.

use actix_web::{HttpRequest, HttpResponse, get, patch, post, web};
use serde::Deserialize;

use crate::error::GatewayResult;
use crate::sharer::SharerUserId;
use crate::state::GatewayState;
use crate::validation::{BookingPayload, check_approval, check_category, decode, positive_id};

/// `category` filter on booking lists.
#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    category: Option<String>,
}

/// Owner decision flag.
#[derive(Debug, Deserialize)]
pub struct ApprovalQuery {
    approved: Option<String>,
}

/// `POST /bookings`
#[post("/bookings")]
pub async fn add_booking(
    state: web::Data<GatewayState>,
    req: HttpRequest,
    _sharer: SharerUserId,
    body: web::Bytes,
) -> GatewayResult<HttpResponse> {
    decode::<BookingPayload>(&body)?.check(state.now())?;
    state.client.forward(&req, Some(body)).await
}

/// `PATCH /bookings/{bookingId}?approved=`
#[patch("/bookings/{booking_id}")]
pub async fn process_booking(
    state: web::Data<GatewayState>,
    req: HttpRequest,
    _sharer: SharerUserId,
    path: web::Path<i64>,
    query: web::Query<ApprovalQuery>,
) -> GatewayResult<HttpResponse> {
    positive_id(path.into_inner(), "bookingId")?;
    check_approval(query.approved.as_deref())?;
    state.client.forward(&req, None).await
}

/// `GET /bookings/owner?category=`
#[get("/bookings/owner")]
pub async fn get_owner_bookings(
    state: web::Data<GatewayState>,
    req: HttpRequest,
    _sharer: SharerUserId,
    query: web::Query<CategoryQuery>,
) -> GatewayResult<HttpResponse> {
    check_category(query.category.as_deref())?;
    state.client.forward(&req, None).await
}

/// `GET /bookings/{bookingId}`
#[get("/bookings/{booking_id}")]
pub async fn get_booking(
    state: web::Data<GatewayState>,
    req: HttpRequest,
    _sharer: SharerUserId,
    path: web::Path<i64>,
) -> GatewayResult<HttpResponse> {
    positive_id(path.into_inner(), "bookingId")?;
    state.client.forward(&req, None).await
}

/// `GET /bookings?category=`
#[get("/bookings")]
pub async fn get_user_bookings(
    state: web::Data<GatewayState>,
    req: HttpRequest,
    _sharer: SharerUserId,
    query: web::Query<CategoryQuery>,
) -> GatewayResult<HttpResponse> {
    check_category(query.category.as_deref())?;
    state.client.forward(&req, None).await
}
