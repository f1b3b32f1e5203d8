//! Comment gate: only the booker of a completed, approved rental may comment.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info};

use crate::domain::comment::booking_for_comment;
use crate::domain::ports::{BookingRepository, CommentCommand, CommentRepository};
use crate::domain::service_support::{
    map_booking_repository_error, map_comment_repository_error, now,
};
use crate::domain::{BookingStatus, Comment, Error, ItemId, NewComment, UserId};

/// Comment service implementing [`CommentCommand`].
#[derive(Clone)]
pub struct CommentService<B, C> {
    bookings: Arc<B>,
    comments: Arc<C>,
    clock: Arc<dyn Clock>,
}

impl<B, C> CommentService<B, C> {
    /// Create a comment service over the given repositories and clock.
    pub fn new(bookings: Arc<B>, comments: Arc<C>, clock: Arc<dyn Clock>) -> Self {
        Self {
            bookings,
            comments,
            clock,
        }
    }
}

fn refused(message: String) -> Error {
    debug!(reason = %message, "comment refused");
    Error::invalid_request(message)
}

#[async_trait]
impl<B, C> CommentCommand for CommentService<B, C>
where
    B: BookingRepository,
    C: CommentRepository,
{
    async fn post_comment(
        &self,
        author_id: UserId,
        item_id: ItemId,
        text: String,
    ) -> Result<Comment, Error> {
        if text.trim().is_empty() {
            return Err(refused("Comment text must not be blank".to_owned()));
        }

        let now = now(self.clock.as_ref());
        let bookings = self
            .bookings
            .list_by_items(&[item_id])
            .await
            .map_err(map_booking_repository_error)?;
        let booking = booking_for_comment(&bookings, author_id, now)
            .ok_or_else(|| Error::not_found(format!("Booking with item {item_id} not found")))?;
        if booking.status != BookingStatus::Approved {
            return Err(refused(format!("Item {item_id} has not been rented")));
        }
        if !booking.is_booker(author_id) {
            return Err(refused("Other users cannot leave comments".to_owned()));
        }
        if booking.end >= now {
            return Err(refused("User did not end the rent".to_owned()));
        }

        let comment = self
            .comments
            .insert(&NewComment {
                text,
                item_id,
                author_id,
                created: now,
            })
            .await
            .map_err(map_comment_repository_error)?;
        info!(comment_id = %comment.id, item_id = %item_id, author_id = %author_id, "comment posted");
        Ok(comment)
    }
}
