//! Booking entities and the rules evaluated against them.
//!
//! A booking moves from [`BookingStatus::Waiting`] to exactly one of the
//! terminal states [`BookingStatus::Approved`] or [`BookingStatus::Rejected`].
//! Lists are filtered by [`BookingCategory`] against a caller-supplied "now"
//! and returned most recent start first.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{BookingId, ItemId, UserId, UserSummary};

/// Lifecycle state of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    /// Requested by the booker, awaiting the owner's decision.
    Waiting,
    /// Accepted by the owner.
    Approved,
    /// Declined by the owner.
    Rejected,
}

impl BookingStatus {
    /// Stored and wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Waiting => "WAITING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }

    /// Whether the owner has already decided on the booking.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Waiting)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a stored status string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown booking status: {0}")]
pub struct UnknownBookingStatus(pub String);

impl FromStr for BookingStatus {
    type Err = UnknownBookingStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "WAITING" => Ok(Self::Waiting),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            other => Err(UnknownBookingStatus(other.to_owned())),
        }
    }
}

/// Named filter applied to a booking list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BookingCategory {
    /// Every booking.
    #[default]
    All,
    /// Started before now and ending after now.
    Current,
    /// Ended before now.
    Past,
    /// Starting after now.
    Future,
    /// Awaiting the owner's decision.
    Waiting,
    /// Declined by the owner.
    Rejected,
}

/// Error returned when a category name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct UnknownBookingCategory(pub String);

impl FromStr for BookingCategory {
    type Err = UnknownBookingCategory;

    /// Parse a category name, ignoring ASCII case.
    ///
    /// # Examples
    /// ```
    /// use shareit_server::domain::BookingCategory;
    ///
    /// assert_eq!("current".parse(), Ok(BookingCategory::Current));
    /// assert!("SOON".parse::<BookingCategory>().is_err());
    /// ```
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        const NAMES: [(&str, BookingCategory); 6] = [
            ("ALL", BookingCategory::All),
            ("CURRENT", BookingCategory::Current),
            ("PAST", BookingCategory::Past),
            ("FUTURE", BookingCategory::Future),
            ("WAITING", BookingCategory::Waiting),
            ("REJECTED", BookingCategory::Rejected),
        ];
        NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(value))
            .map(|(_, category)| *category)
            .ok_or_else(|| UnknownBookingCategory(value.to_owned()))
    }
}

impl BookingCategory {
    /// Whether `booking` belongs to this category at instant `now`.
    ///
    /// Time comparisons are strict, so a booking starting or ending exactly at
    /// `now` is neither current, past nor future.
    #[must_use]
    pub fn matches(self, booking: &Booking, now: NaiveDateTime) -> bool {
        match self {
            Self::All => true,
            Self::Current => booking.start < now && booking.end > now,
            Self::Past => booking.end < now,
            Self::Future => booking.start > now,
            Self::Waiting => booking.status == BookingStatus::Waiting,
            Self::Rejected => booking.status == BookingStatus::Rejected,
        }
    }

    /// Keep the bookings in this category, most recent start first.
    ///
    /// Equal starts are ordered by descending id so results are stable.
    #[must_use]
    pub fn select(self, bookings: Vec<Booking>, now: NaiveDateTime) -> Vec<Booking> {
        let mut selected: Vec<Booking> = bookings
            .into_iter()
            .filter(|booking| self.matches(booking, now))
            .collect();
        selected.sort_by(|a, b| b.start.cmp(&a.start).then_with(|| b.id.cmp(&a.id)));
        selected
    }
}

/// Owner's verdict on a waiting booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalDecision {
    /// Accept the booking.
    Approve,
    /// Decline the booking.
    Reject,
}

/// Error returned when the `approved` flag is neither `true` nor `false`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid 'approved' parameter value (can be true or false)")]
pub struct InvalidApprovalFlag;

impl FromStr for ApprovalDecision {
    type Err = InvalidApprovalFlag;

    /// Accept exactly the literals `true` and `false`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "true" => Ok(Self::Approve),
            "false" => Ok(Self::Reject),
            _ => Err(InvalidApprovalFlag),
        }
    }
}

impl ApprovalDecision {
    /// Status the booking moves to.
    #[must_use]
    pub const fn status(self) -> BookingStatus {
        match self {
            Self::Approve => BookingStatus::Approved,
            Self::Reject => BookingStatus::Rejected,
        }
    }
}

/// Item projection carried by a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSummary {
    /// Item identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// User who listed the item.
    pub owner_id: UserId,
}

/// A booking with its item and booker resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    /// Booking identifier.
    pub id: BookingId,
    /// Start of the rental window.
    pub start: NaiveDateTime,
    /// End of the rental window.
    pub end: NaiveDateTime,
    /// Booked item.
    pub item: ItemSummary,
    /// User who requested the booking.
    pub booker: UserSummary,
    /// Current decision state.
    pub status: BookingStatus,
}

impl Booking {
    /// Whether `user_id` made this booking.
    #[must_use]
    pub fn is_booker(&self, user_id: UserId) -> bool {
        self.booker.id == user_id
    }

    /// Whether `user_id` owns the booked item.
    #[must_use]
    pub fn is_item_owner(&self, user_id: UserId) -> bool {
        self.item.owner_id == user_id
    }

    /// Compact view exposed on item details.
    #[must_use]
    pub fn snapshot(&self) -> BookingSnapshot {
        BookingSnapshot {
            id: self.id,
            booker_id: self.booker.id,
            start: self.start,
            end: self.end,
        }
    }
}

/// Booking fields supplied by a prospective booker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    /// Item to book.
    pub item_id: ItemId,
    /// Requested start.
    pub start: NaiveDateTime,
    /// Requested end.
    pub end: NaiveDateTime,
}

/// Row to persist for a newly requested booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    /// Item to book.
    pub item_id: ItemId,
    /// Requesting user.
    pub booker_id: UserId,
    /// Requested start.
    pub start: NaiveDateTime,
    /// Requested end.
    pub end: NaiveDateTime,
    /// Initial status, always waiting.
    pub status: BookingStatus,
}

/// Compact booking view: id, booker and window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingSnapshot {
    /// Booking identifier.
    pub id: BookingId,
    /// Requesting user.
    pub booker_id: UserId,
    /// Start of the rental window.
    pub start: NaiveDateTime,
    /// End of the rental window.
    pub end: NaiveDateTime,
}

/// Last and next bookings of one item relative to "now".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingNeighbours {
    /// Latest non-rejected booking that started at or before now.
    pub last: Option<BookingSnapshot>,
    /// Earliest non-rejected booking starting after now.
    pub next: Option<BookingSnapshot>,
}

impl BookingNeighbours {
    /// Compute neighbours from every booking of a single item.
    #[must_use]
    pub fn around(bookings: &[Booking], now: NaiveDateTime) -> Self {
        let live = bookings
            .iter()
            .filter(|booking| booking.status != BookingStatus::Rejected);
        let last = live
            .clone()
            .filter(|booking| booking.start <= now)
            .max_by_key(|booking| (booking.start, booking.id))
            .map(Booking::snapshot);
        let next = live
            .filter(|booking| booking.start > now)
            .min_by_key(|booking| (booking.start, booking.id))
            .map(Booking::snapshot);
        Self { last, next }
    }
}

#[cfg(test)]
#[path = "booking_tests.rs"]
mod tests;
