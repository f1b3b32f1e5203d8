//! Domain entities, ports and services.
//!
//! Entities are plain data with validating constructors where the wire can
//! supply bad input. Services implement the driving ports over the driven
//! repository ports and never see HTTP or SQL types.
//!
//! Public surface:
//! - [`Error`] and [`ErrorCode`]: transport-agnostic failure payload.
//! - Booking rules: [`BookingCategory`], [`ApprovalDecision`],
//!   [`BookingNeighbours`] and the [`BookingService`].
//! - CRUD services for users, items, comments and item requests.

mod booking;
mod booking_service;
mod comment;
mod comment_service;
pub mod error;
mod ids;
mod item;
mod item_request;
mod item_request_service;
mod item_service;
pub mod ports;
mod service_support;
pub mod trace_id;
mod user;
mod user_service;

pub use self::booking::{
    ApprovalDecision, Booking, BookingCategory, BookingDraft, BookingNeighbours,
    BookingSnapshot, BookingStatus, InvalidApprovalFlag, ItemSummary, NewBooking,
    UnknownBookingCategory, UnknownBookingStatus,
};
pub use self::booking_service::BookingService;
pub use self::comment::{Comment, NewComment};
pub use self::comment_service::CommentService;
pub use self::error::{Error, ErrorCode};
pub use self::ids::{BookingId, CommentId, ItemId, RequestId, UserId};
pub use self::item::{
    Item, ItemDetails, ItemDraft, ItemPatch, ItemSearch, ItemValidationError, NewItem,
};
pub use self::item_request::{ItemRequest, ItemRequestDetails, NewItemRequest, RequestAnswer};
pub use self::item_request_service::ItemRequestService;
pub use self::item_service::ItemService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{NewUser, User, UserPatch, UserSummary, UserValidationError};
pub use self::user_service::UserService;

/// Convenient result alias for driving port operations.
///
/// # Examples
/// ```
/// use shareit_server::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<u32> {
///     Err(Error::not_found("Item with id 3 not found"))
/// }
///
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
