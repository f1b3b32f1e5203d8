//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. Conversions into domain entities live next
//! to the rows they read.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::{
    Booking, BookingId, Comment, CommentId, Item, ItemId, ItemRequest, ItemSummary,
    RequestId, UnknownBookingStatus, User, UserId, UserSummary,
};

use super::schema::{bookings, comments, items, requests, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::new(row.id),
            name: row.name,
            email: row.email,
        }
    }
}

impl UserRow {
    pub(crate) fn summary(self) -> UserSummary {
        UserSummary {
            id: UserId::new(self.id),
            name: self.name,
        }
    }
}

/// Insertable struct for creating user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

/// Changeset applied when a user is edited.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserUpdate<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

/// Row struct for reading from the items table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ItemRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: i64,
    pub request_id: Option<i64>,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Self {
            id: ItemId::new(row.id),
            name: row.name,
            description: row.description,
            available: row.available,
            owner_id: UserId::new(row.owner_id),
            request_id: row.request_id.map(RequestId::new),
        }
    }
}

/// Insertable struct for creating item records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = items)]
pub(crate) struct NewItemRow<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub available: bool,
    pub owner_id: i64,
    pub request_id: Option<i64>,
}

/// Changeset applied when an owner edits an item.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = items)]
pub(crate) struct ItemUpdate<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub available: bool,
}

/// Row struct for reading from the bookings table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = bookings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BookingRow {
    pub id: i64,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub status: String,
}

/// A booking joined with its item and booker.
pub(crate) type JoinedBookingRow = (BookingRow, ItemRow, UserRow);

/// Resolve a joined booking row into the domain entity.
pub(crate) fn joined_booking(
    (booking, item, booker): JoinedBookingRow,
) -> Result<Booking, UnknownBookingStatus> {
    Ok(Booking {
        id: BookingId::new(booking.id),
        start: booking.start_date,
        end: booking.end_date,
        item: ItemSummary {
            id: ItemId::new(item.id),
            name: item.name,
            owner_id: UserId::new(item.owner_id),
        },
        booker: booker.summary(),
        status: booking.status.parse()?,
    })
}

/// Insertable struct for creating booking records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = bookings)]
pub(crate) struct NewBookingRow<'a> {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub item_id: i64,
    pub booker_id: i64,
    pub status: &'a str,
}

/// Row struct for reading from the comments table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CommentRow {
    pub id: i64,
    pub text: String,
    pub item_id: i64,
    pub created: NaiveDateTime,
}

/// Resolve a comment joined with its author.
pub(crate) fn joined_comment((comment, author): (CommentRow, UserRow)) -> Comment {
    Comment {
        id: CommentId::new(comment.id),
        text: comment.text,
        item_id: ItemId::new(comment.item_id),
        author: author.summary(),
        created: comment.created,
    }
}

/// Insertable struct for creating comment records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = comments)]
pub(crate) struct NewCommentRow<'a> {
    pub text: &'a str,
    pub item_id: i64,
    pub author_id: i64,
    pub created: NaiveDateTime,
}

/// Row struct for reading from the requests table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = requests)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ItemRequestRow {
    pub id: i64,
    pub description: String,
    pub requestor_id: i64,
    pub created: NaiveDateTime,
}

impl From<ItemRequestRow> for ItemRequest {
    fn from(row: ItemRequestRow) -> Self {
        Self {
            id: RequestId::new(row.id),
            description: row.description,
            requestor_id: UserId::new(row.requestor_id),
            created: row.created,
        }
    }
}

/// Insertable struct for creating request records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = requests)]
pub(crate) struct NewItemRequestRow<'a> {
    pub description: &'a str,
    pub requestor_id: i64,
    pub created: NaiveDateTime,
}
