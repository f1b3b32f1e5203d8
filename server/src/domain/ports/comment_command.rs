//! Driving port for posting comments.

use async_trait::async_trait;

use crate::domain::{Comment, Error, ItemId, UserId};

/// Driving port for leaving a comment after a completed rental.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentCommand: Send + Sync {
    /// Post `text` on `item_id` as `author_id`.
    async fn post_comment(
        &self,
        author_id: UserId,
        item_id: ItemId,
        text: String,
    ) -> Result<Comment, Error>;
}
