//! Booking HTTP handlers.
//!
//! ```text
//! POST  /bookings                      {"itemId":1,"start":"...","end":"..."}
//! PATCH /bookings/{bookingId}?approved=true|false
//! GET   /bookings/{bookingId}
//! GET   /bookings?category=ALL
//! GET   /bookings/owner?category=ALL
//! ```

use actix_web::{get, patch, post, web};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Booking, BookingDraft, BookingId, BookingStatus, Error, ItemId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::sharer::SharerUserId;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, parse_approval, parse_category, parse_timestamp, positive_id, require,
};

/// Request payload for creating a booking.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequestBody {
    /// Item to book.
    #[schema(example = 1)]
    pub item_id: Option<i64>,
    /// Requested start, `YYYY-MM-DDTHH:MM:SS`.
    #[schema(example = "2026-03-11T10:00:00")]
    pub start: Option<String>,
    /// Requested end, `YYYY-MM-DDTHH:MM:SS`.
    #[schema(example = "2026-03-12T10:00:00")]
    pub end: Option<String>,
}

/// Item projection embedded in booking responses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct ShortItemBody {
    /// Item identifier.
    pub id: i64,
    /// Item name.
    pub name: String,
}

/// User projection embedded in booking responses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct ShortUserBody {
    /// User identifier.
    pub id: i64,
    /// User name.
    pub name: String,
}

/// Booking response payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct BookingBody {
    /// Booking identifier.
    pub id: i64,
    /// Start of the rental window.
    pub start: NaiveDateTime,
    /// End of the rental window.
    pub end: NaiveDateTime,
    /// Booked item.
    pub item: ShortItemBody,
    /// Requesting user.
    pub booker: ShortUserBody,
    /// Current decision state.
    pub status: BookingStatus,
}

impl From<Booking> for BookingBody {
    fn from(value: Booking) -> Self {
        Self {
            id: value.id.get(),
            start: value.start,
            end: value.end,
            item: ShortItemBody {
                id: value.item.id.get(),
                name: value.item.name,
            },
            booker: ShortUserBody {
                id: value.booker.id.get(),
                name: value.booker.name,
            },
            status: value.status,
        }
    }
}

/// `category` filter for booking lists.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CategoryQuery {
    /// One of ALL, CURRENT, PAST, FUTURE, WAITING, REJECTED; any case.
    pub category: Option<String>,
}

/// Owner decision on a waiting booking.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ApprovalQuery {
    /// Exactly `true` or `false`.
    pub approved: Option<String>,
}

fn parse_booking_draft(payload: BookingRequestBody) -> Result<BookingDraft, Error> {
    let item_id = positive_id(
        require(payload.item_id, FieldName::new("itemId"))?,
        FieldName::new("itemId"),
    )?;
    let start = parse_timestamp(
        require(payload.start, FieldName::new("start"))?,
        FieldName::new("start"),
    )?;
    let end = parse_timestamp(
        require(payload.end, FieldName::new("end"))?,
        FieldName::new("end"),
    )?;
    Ok(BookingDraft {
        item_id: ItemId::new(item_id),
        start,
        end,
    })
}

fn booking_list(bookings: Vec<Booking>) -> web::Json<Vec<BookingBody>> {
    web::Json(bookings.into_iter().map(BookingBody::from).collect())
}

/// Request a booking on an item.
#[utoipa::path(
    post,
    path = "/bookings",
    request_body = BookingRequestBody,
    params(("X-Sharer-User-Id" = i64, Header, description = "Acting user")),
    responses(
        (status = 200, description = "Booking created in WAITING state", body = BookingBody),
        (status = 400, description = "Invalid request or booking rule violated", body = Error),
        (status = 404, description = "User or item not found", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["bookings"],
    operation_id = "addBooking"
)]
#[post("/bookings")]
pub async fn add_booking(
    state: web::Data<HttpState>,
    sharer: SharerUserId,
    payload: web::Json<BookingRequestBody>,
) -> ApiResult<web::Json<BookingBody>> {
    let draft = parse_booking_draft(payload.into_inner())?;
    let booking = state.bookings.add_booking(sharer.user_id(), draft).await?;
    Ok(web::Json(booking.into()))
}

/// Approve or reject a waiting booking as the item owner.
#[utoipa::path(
    patch,
    path = "/bookings/{bookingId}",
    params(
        ("bookingId" = i64, Path, description = "Booking identifier"),
        ("X-Sharer-User-Id" = i64, Header, description = "Item owner"),
        ApprovalQuery
    ),
    responses(
        (status = 200, description = "Booking processed", body = BookingBody),
        (status = 400, description = "Invalid flag, not the owner or already processed", body = Error),
        (status = 404, description = "Booking not found", body = Error)
    ),
    tags = ["bookings"],
    operation_id = "processBooking"
)]
#[patch("/bookings/{booking_id}")]
pub async fn process_booking(
    state: web::Data<HttpState>,
    sharer: SharerUserId,
    path: web::Path<i64>,
    query: web::Query<ApprovalQuery>,
) -> ApiResult<web::Json<BookingBody>> {
    let booking_id = positive_id(path.into_inner(), FieldName::new("bookingId"))?;
    let decision = parse_approval(query.approved.as_deref())?;
    let booking = state
        .bookings
        .process_booking(BookingId::new(booking_id), sharer.user_id(), decision)
        .await?;
    Ok(web::Json(booking.into()))
}

/// Bookings on items owned by the caller.
#[utoipa::path(
    get,
    path = "/bookings/owner",
    params(
        ("X-Sharer-User-Id" = i64, Header, description = "Item owner"),
        CategoryQuery
    ),
    responses(
        (status = 200, description = "Bookings, most recent start first", body = [BookingBody]),
        (status = 400, description = "Unknown category", body = Error),
        (status = 404, description = "User not found", body = Error)
    ),
    tags = ["bookings"],
    operation_id = "getOwnerBookings"
)]
#[get("/bookings/owner")]
pub async fn get_owner_bookings(
    state: web::Data<HttpState>,
    sharer: SharerUserId,
    query: web::Query<CategoryQuery>,
) -> ApiResult<web::Json<Vec<BookingBody>>> {
    let category = parse_category(query.category.as_deref())?;
    let bookings = state
        .bookings_query
        .get_user_items_bookings(sharer.user_id(), category)
        .await?;
    Ok(booking_list(bookings))
}

/// Fetch one booking as its booker or the item owner.
#[utoipa::path(
    get,
    path = "/bookings/{bookingId}",
    params(
        ("bookingId" = i64, Path, description = "Booking identifier"),
        ("X-Sharer-User-Id" = i64, Header, description = "Booker or item owner")
    ),
    responses(
        (status = 200, description = "Booking", body = BookingBody),
        (status = 400, description = "Caller is neither booker nor owner", body = Error),
        (status = 404, description = "Booking not found", body = Error)
    ),
    tags = ["bookings"],
    operation_id = "getBooking"
)]
#[get("/bookings/{booking_id}")]
pub async fn get_booking(
    state: web::Data<HttpState>,
    sharer: SharerUserId,
    path: web::Path<i64>,
) -> ApiResult<web::Json<BookingBody>> {
    let booking_id = positive_id(path.into_inner(), FieldName::new("bookingId"))?;
    let booking = state
        .bookings_query
        .get_booking(sharer.user_id(), BookingId::new(booking_id))
        .await?;
    Ok(web::Json(booking.into()))
}

/// Bookings made by the caller.
#[utoipa::path(
    get,
    path = "/bookings",
    params(
        ("X-Sharer-User-Id" = i64, Header, description = "Booker"),
        CategoryQuery
    ),
    responses(
        (status = 200, description = "Bookings, most recent start first", body = [BookingBody]),
        (status = 400, description = "Unknown category", body = Error),
        (status = 404, description = "User not found", body = Error)
    ),
    tags = ["bookings"],
    operation_id = "getUserBookings"
)]
#[get("/bookings")]
pub async fn get_user_bookings(
    state: web::Data<HttpState>,
    sharer: SharerUserId,
    query: web::Query<CategoryQuery>,
) -> ApiResult<web::Json<Vec<BookingBody>>> {
    let category = parse_category(query.category.as_deref())?;
    let bookings = state
        .bookings_query
        .get_user_bookings(sharer.user_id(), category)
        .await?;
    Ok(booking_list(bookings))
}

#[cfg(test)]
#[path = "bookings_tests.rs"]
mod tests;
