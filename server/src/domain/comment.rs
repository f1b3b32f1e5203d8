//! Comments left on items after a completed rental.

use chrono::NaiveDateTime;

use super::{Booking, BookingStatus, CommentId, ItemId, UserId, UserSummary};

/// A persisted comment with its author resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Comment identifier.
    pub id: CommentId,
    /// Comment body.
    pub text: String,
    /// Item commented on.
    pub item_id: ItemId,
    /// User who wrote the comment.
    pub author: UserSummary,
    /// Time the comment was accepted.
    pub created: NaiveDateTime,
}

/// Row to persist for a new comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    /// Comment body.
    pub text: String,
    /// Item commented on.
    pub item_id: ItemId,
    /// Writing user.
    pub author_id: UserId,
    /// Time the comment was accepted.
    pub created: NaiveDateTime,
}

/// Pick the booking of an item that decides whether `user_id` may comment.
///
/// Preference, highest first: the user's approved booking that has ended,
/// the user's approved booking, any booking by the user, any approved
/// booking, any booking. Ties go to the most recently ended booking.
pub(crate) fn booking_for_comment(
    bookings: &[Booking],
    user_id: UserId,
    now: NaiveDateTime,
) -> Option<&Booking> {
    bookings
        .iter()
        .max_by_key(|booking| (comment_rank(booking, user_id, now), booking.end, booking.id))
}

fn comment_rank(booking: &Booking, user_id: UserId, now: NaiveDateTime) -> u8 {
    let own = booking.is_booker(user_id);
    let approved = booking.status == BookingStatus::Approved;
    match (own, approved, booking.end < now) {
        (true, true, true) => 4,
        (true, true, false) => 3,
        (true, false, _) => 2,
        (false, true, _) => 1,
        (false, false, _) => 0,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::{BookingId, ItemSummary};

    #[fixture]
    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 5, 1)
            .and_then(|date| date.and_hms_opt(9, 30, 0))
            .expect("valid timestamp")
    }

    fn booking(id: i64, booker: i64, status: BookingStatus, end: NaiveDateTime) -> Booking {
        Booking {
            id: BookingId::new(id),
            start: end - Duration::days(1),
            end,
            item: ItemSummary {
                id: ItemId::new(3),
                name: "Tent".to_owned(),
                owner_id: UserId::new(99),
            },
            booker: UserSummary {
                id: UserId::new(booker),
                name: format!("user-{booker}"),
            },
            status,
        }
    }

    #[rstest]
    fn prefers_own_completed_rental(now: NaiveDateTime) {
        let bookings = vec![
            booking(1, 7, BookingStatus::Approved, now - Duration::days(3)),
            booking(2, 5, BookingStatus::Approved, now - Duration::days(1)),
            booking(3, 5, BookingStatus::Waiting, now + Duration::days(4)),
        ];
        let chosen = booking_for_comment(&bookings, UserId::new(5), now).expect("booking");
        assert_eq!(chosen.id, BookingId::new(2));
    }

    #[rstest]
    fn falls_back_to_other_approved_booking(now: NaiveDateTime) {
        let bookings = vec![
            booking(1, 7, BookingStatus::Rejected, now - Duration::days(3)),
            booking(2, 8, BookingStatus::Approved, now - Duration::days(1)),
        ];
        let chosen = booking_for_comment(&bookings, UserId::new(5), now).expect("booking");
        assert_eq!(chosen.id, BookingId::new(2));
    }

    #[rstest]
    fn own_unapproved_booking_beats_foreign_approved(now: NaiveDateTime) {
        let bookings = vec![
            booking(1, 8, BookingStatus::Approved, now - Duration::days(3)),
            booking(2, 5, BookingStatus::Rejected, now - Duration::days(1)),
        ];
        let chosen = booking_for_comment(&bookings, UserId::new(5), now).expect("booking");
        assert_eq!(chosen.id, BookingId::new(2));
    }

    #[rstest]
    fn none_without_bookings(now: NaiveDateTime) {
        assert!(booking_for_comment(&[], UserId::new(5), now).is_none());
    }
}
