//! Driving port for booking mutations.

use async_trait::async_trait;

use crate::domain::{ApprovalDecision, Booking, BookingDraft, BookingId, Error, UserId};

/// Driving port for requesting bookings and deciding on them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingCommand: Send + Sync {
    /// Request a booking of `draft.item_id` on behalf of `booker_id`.
    ///
    /// The booker and the item must exist, the item must be available and
    /// the window must not be empty. The booking starts out waiting.
    async fn add_booking(&self, booker_id: UserId, draft: BookingDraft) -> Result<Booking, Error>;

    /// Approve or reject a waiting booking as the item's owner.
    async fn process_booking(
        &self,
        booking_id: BookingId,
        owner_id: UserId,
        decision: ApprovalDecision,
    ) -> Result<Booking, Error>;
}
