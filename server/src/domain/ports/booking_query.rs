//! Driving port for booking reads.

use async_trait::async_trait;

use crate::domain::{Booking, BookingCategory, BookingId, Error, UserId};

/// Driving port for reading bookings as a booker or an item owner.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingQuery: Send + Sync {
    /// Fetch one booking visible to its booker or the item's owner.
    async fn get_booking(&self, user_id: UserId, booking_id: BookingId) -> Result<Booking, Error>;

    /// Bookings made by `user_id` in `category`, most recent start first.
    async fn get_user_bookings(
        &self,
        user_id: UserId,
        category: BookingCategory,
    ) -> Result<Vec<Booking>, Error>;

    /// Bookings of items owned by `user_id` in `category`, most recent start
    /// first.
    async fn get_user_items_bookings(
        &self,
        user_id: UserId,
        category: BookingCategory,
    ) -> Result<Vec<Booking>, Error>;
}
