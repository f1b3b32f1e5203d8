//! Domain ports.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters; driving
//! ports (`*Command`, `*Query`) are implemented by domain services and called
//! by inbound adapters.

mod macros;

mod booking_command;
mod booking_query;
mod booking_repository;
mod comment_command;
mod comment_repository;
mod item_command;
mod item_query;
mod item_repository;
mod item_request_command;
mod item_request_query;
mod item_request_repository;
mod user_command;
mod user_query;
mod user_repository;

pub(crate) use macros::define_port_error;

pub use booking_command::BookingCommand;
#[cfg(test)]
pub use booking_command::MockBookingCommand;
pub use booking_query::BookingQuery;
#[cfg(test)]
pub use booking_query::MockBookingQuery;
#[cfg(test)]
pub use booking_repository::MockBookingRepository;
pub use booking_repository::{BookingRepository, BookingRepositoryError};
pub use comment_command::CommentCommand;
#[cfg(test)]
pub use comment_command::MockCommentCommand;
#[cfg(test)]
pub use comment_repository::MockCommentRepository;
pub use comment_repository::{CommentRepository, CommentRepositoryError};
pub use item_command::ItemCommand;
#[cfg(test)]
pub use item_command::MockItemCommand;
pub use item_query::ItemQuery;
#[cfg(test)]
pub use item_query::MockItemQuery;
#[cfg(test)]
pub use item_repository::MockItemRepository;
pub use item_repository::{ItemRepository, ItemRepositoryError};
pub use item_request_command::ItemRequestCommand;
#[cfg(test)]
pub use item_request_command::MockItemRequestCommand;
pub use item_request_query::ItemRequestQuery;
#[cfg(test)]
pub use item_request_query::MockItemRequestQuery;
#[cfg(test)]
pub use item_request_repository::MockItemRequestRepository;
pub use item_request_repository::{ItemRequestRepository, ItemRequestRepositoryError};
pub use user_command::UserCommand;
#[cfg(test)]
pub use user_command::MockUserCommand;
pub use user_query::UserQuery;
#[cfg(test)]
pub use user_query::MockUserQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
