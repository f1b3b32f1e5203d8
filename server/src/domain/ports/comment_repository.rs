//! Port for comment persistence.

use async_trait::async_trait;

use crate::domain::{Comment, ItemId, NewComment};

use super::define_port_error;

define_port_error! {
    /// Errors raised by comment repository adapters.
    pub enum CommentRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "comment repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "comment repository query failed: {message}",
    }
}

/// Port for reading and writing comments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Persist a comment and return it with its author resolved.
    async fn insert(&self, comment: &NewComment) -> Result<Comment, CommentRepositoryError>;

    /// Comments on any of the given items, oldest first.
    async fn list_by_items(&self, item_ids: &[ItemId])
    -> Result<Vec<Comment>, CommentRepositoryError>;
}
