//! PostgreSQL-backed `BookingRepository` implementation using Diesel ORM.
//!
//! Reads join each booking with its item and booker so the domain receives
//! fully resolved [`Booking`] values.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::domain::ports::{BookingRepository, BookingRepositoryError};
use crate::domain::{Booking, BookingId, BookingStatus, ItemId, NewBooking, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{BookingRow, ItemRow, JoinedBookingRow, NewBookingRow, UserRow, joined_booking};
use super::pool::{DbPool, PoolError};
use super::schema::{bookings, items, users};

/// Booking rows joined with their item and booker, ready for a filter.
macro_rules! joined_bookings {
    () => {
        bookings::table
            .inner_join(items::table)
            .inner_join(users::table)
            .select((
                BookingRow::as_select(),
                ItemRow::as_select(),
                UserRow::as_select(),
            ))
    };
}

/// Diesel-backed implementation of the `BookingRepository` port.
#[derive(Clone)]
pub struct DieselBookingRepository {
    pool: DbPool,
}

impl DieselBookingRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> BookingRepositoryError {
    map_basic_pool_error(error, BookingRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> BookingRepositoryError {
    map_basic_diesel_error(
        error,
        BookingRepositoryError::query,
        BookingRepositoryError::connection,
    )
}

fn resolve(row: JoinedBookingRow) -> Result<Booking, BookingRepositoryError> {
    joined_booking(row).map_err(|err| BookingRepositoryError::query(err.to_string()))
}

fn resolve_all(rows: Vec<JoinedBookingRow>) -> Result<Vec<Booking>, BookingRepositoryError> {
    rows.into_iter().map(resolve).collect()
}

async fn load_one(
    conn: &mut AsyncPgConnection,
    id: i64,
) -> Result<Option<Booking>, BookingRepositoryError> {
    let row: Option<JoinedBookingRow> = joined_bookings!()
        .filter(bookings::id.eq(id))
        .first(conn)
        .await
        .optional()
        .map_err(map_diesel_error)?;
    row.map(resolve).transpose()
}

async fn load_existing(
    conn: &mut AsyncPgConnection,
    id: i64,
) -> Result<Booking, BookingRepositoryError> {
    load_one(conn, id)
        .await?
        .ok_or_else(|| BookingRepositoryError::query(format!("booking {id} vanished")))
}

#[async_trait]
impl BookingRepository for DieselBookingRepository {
    async fn insert(&self, booking: &NewBooking) -> Result<Booking, BookingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let id: i64 = diesel::insert_into(bookings::table)
            .values(&NewBookingRow {
                start_date: booking.start,
                end_date: booking.end,
                item_id: booking.item_id.get(),
                booker_id: booking.booker_id.get(),
                status: booking.status.as_str(),
            })
            .returning(bookings::id)
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        load_existing(&mut conn, id).await
    }

    async fn find_by_id(&self, id: BookingId) -> Result<Option<Booking>, BookingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        load_one(&mut conn, id.get()).await
    }

    async fn update_status(
        &self,
        id: BookingId,
        status: BookingStatus,
    ) -> Result<Booking, BookingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::update(bookings::table.find(id.get()))
            .set(bookings::status.eq(status.as_str()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        load_existing(&mut conn, id.get()).await
    }

    async fn list_by_booker(
        &self,
        booker_id: UserId,
    ) -> Result<Vec<Booking>, BookingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<JoinedBookingRow> = joined_bookings!()
            .filter(bookings::booker_id.eq(booker_id.get()))
            .order_by(bookings::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        resolve_all(rows)
    }

    async fn list_by_items(
        &self,
        item_ids: &[ItemId],
    ) -> Result<Vec<Booking>, BookingRepositoryError> {
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let ids: Vec<i64> = item_ids.iter().map(|id| id.get()).collect();

        let rows: Vec<JoinedBookingRow> = joined_bookings!()
            .filter(bookings::item_id.eq_any(ids))
            .order_by(bookings::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        resolve_all(rows)
    }
}
