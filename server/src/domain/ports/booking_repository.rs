//! Port for booking persistence.
//!
//! Adapters return bookings with their item and booker projections resolved so
//! the rule engine never issues follow-up lookups per booking.

use async_trait::async_trait;

use crate::domain::{Booking, BookingId, BookingStatus, ItemId, NewBooking, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by booking repository adapters.
    pub enum BookingRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "booking repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "booking repository query failed: {message}",
    }
}

/// Port for reading and writing bookings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persist a new booking and return it resolved.
    async fn insert(&self, booking: &NewBooking) -> Result<Booking, BookingRepositoryError>;

    /// Find a booking by id.
    async fn find_by_id(&self, id: BookingId) -> Result<Option<Booking>, BookingRepositoryError>;

    /// Set the status of an existing booking and return it resolved.
    async fn update_status(
        &self,
        id: BookingId,
        status: BookingStatus,
    ) -> Result<Booking, BookingRepositoryError>;

    /// Every booking made by `booker_id`, in no particular order.
    async fn list_by_booker(&self, booker_id: UserId)
    -> Result<Vec<Booking>, BookingRepositoryError>;

    /// Every booking of the given items, in no particular order.
    async fn list_by_items(&self, item_ids: &[ItemId])
    -> Result<Vec<Booking>, BookingRepositoryError>;
}
