//! Booking rule engine.
//!
//! Validates booking requests, applies the owner's decision exactly once,
//! authorises single-booking reads and produces category-filtered lists for
//! bookers and item owners.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info};

use crate::domain::ports::{
    BookingCommand, BookingQuery, BookingRepository, ItemRepository, UserRepository,
};
use crate::domain::service_support::{
    map_booking_repository_error, map_item_repository_error, now, require_item, require_user,
};
use crate::domain::{
    ApprovalDecision, Booking, BookingCategory, BookingDraft, BookingId, BookingStatus, Error,
    ItemId, NewBooking, UserId,
};

/// Booking service implementing the booking driving ports.
#[derive(Clone)]
pub struct BookingService<B, I, U> {
    bookings: Arc<B>,
    items: Arc<I>,
    users: Arc<U>,
    clock: Arc<dyn Clock>,
}

impl<B, I, U> BookingService<B, I, U> {
    /// Create a booking service over the given repositories and clock.
    pub fn new(bookings: Arc<B>, items: Arc<I>, users: Arc<U>, clock: Arc<dyn Clock>) -> Self {
        Self {
            bookings,
            items,
            users,
            clock,
        }
    }
}

impl<B, I, U> BookingService<B, I, U>
where
    B: BookingRepository,
{
    async fn require_booking(&self, booking_id: BookingId) -> Result<Booking, Error> {
        self.bookings
            .find_by_id(booking_id)
            .await
            .map_err(map_booking_repository_error)?
            .ok_or_else(|| Error::not_found(format!("Booking with id {booking_id} not found")))
    }
}

fn rejected(message: &str) -> Error {
    debug!(reason = message, "booking rule rejected request");
    Error::invalid_request(message)
}

#[async_trait]
impl<B, I, U> BookingCommand for BookingService<B, I, U>
where
    B: BookingRepository,
    I: ItemRepository,
    U: UserRepository,
{
    async fn add_booking(&self, booker_id: UserId, draft: BookingDraft) -> Result<Booking, Error> {
        require_user(self.users.as_ref(), booker_id).await?;
        let item = require_item(self.items.as_ref(), draft.item_id).await?;
        if !item.available {
            return Err(rejected("Cannot book unavailable item"));
        }
        if draft.start == draft.end {
            return Err(rejected("Start time cannot be equal to end time"));
        }

        let booking = self
            .bookings
            .insert(&NewBooking {
                item_id: item.id,
                booker_id,
                start: draft.start,
                end: draft.end,
                status: BookingStatus::Waiting,
            })
            .await
            .map_err(map_booking_repository_error)?;
        info!(
            booking_id = %booking.id,
            item_id = %booking.item.id,
            booker_id = %booker_id,
            "booking requested"
        );
        Ok(booking)
    }

    async fn process_booking(
        &self,
        booking_id: BookingId,
        owner_id: UserId,
        decision: ApprovalDecision,
    ) -> Result<Booking, Error> {
        let booking = self.require_booking(booking_id).await?;
        if !booking.is_item_owner(owner_id) {
            return Err(rejected("Item requests can be approved by item owner"));
        }
        if booking.status.is_terminal() {
            return Err(rejected(&format!(
                "Booking {booking_id} has already been processed"
            )));
        }

        let updated = self
            .bookings
            .update_status(booking_id, decision.status())
            .await
            .map_err(map_booking_repository_error)?;
        info!(booking_id = %booking_id, status = %updated.status, "booking processed");
        Ok(updated)
    }
}

#[async_trait]
impl<B, I, U> BookingQuery for BookingService<B, I, U>
where
    B: BookingRepository,
    I: ItemRepository,
    U: UserRepository,
{
    async fn get_booking(&self, user_id: UserId, booking_id: BookingId) -> Result<Booking, Error> {
        let booking = self.require_booking(booking_id).await?;
        if booking.is_booker(user_id) || booking.is_item_owner(user_id) {
            Ok(booking)
        } else {
            Err(rejected("You must be a booker or item owner to get booking info"))
        }
    }

    async fn get_user_bookings(
        &self,
        user_id: UserId,
        category: BookingCategory,
    ) -> Result<Vec<Booking>, Error> {
        require_user(self.users.as_ref(), user_id).await?;
        let bookings = self
            .bookings
            .list_by_booker(user_id)
            .await
            .map_err(map_booking_repository_error)?;
        Ok(category.select(bookings, now(self.clock.as_ref())))
    }

    async fn get_user_items_bookings(
        &self,
        user_id: UserId,
        category: BookingCategory,
    ) -> Result<Vec<Booking>, Error> {
        require_user(self.users.as_ref(), user_id).await?;
        let item_ids: Vec<ItemId> = self
            .items
            .list_by_owner(user_id)
            .await
            .map_err(map_item_repository_error)?
            .into_iter()
            .map(|item| item.id)
            .collect();
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        let bookings = self
            .bookings
            .list_by_items(&item_ids)
            .await
            .map_err(map_booking_repository_error)?;
        Ok(category.select(bookings, now(self.clock.as_ref())))
    }
}

#[cfg(test)]
#[path = "booking_service_tests.rs"]
mod tests;
