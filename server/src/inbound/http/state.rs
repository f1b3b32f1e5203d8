//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    BookingCommand, BookingQuery, CommentCommand, ItemCommand, ItemQuery, ItemRequestCommand,
    ItemRequestQuery, UserCommand, UserQuery,
};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    /// Booking commands.
    pub bookings: Arc<dyn BookingCommand>,
    /// Booking reads.
    pub bookings_query: Arc<dyn BookingQuery>,
    /// Comment command.
    pub comments: Arc<dyn CommentCommand>,
    /// Item commands.
    pub items: Arc<dyn ItemCommand>,
    /// Item reads.
    pub items_query: Arc<dyn ItemQuery>,
    /// User commands.
    pub users: Arc<dyn UserCommand>,
    /// User reads.
    pub users_query: Arc<dyn UserQuery>,
    /// Item request commands.
    pub requests: Arc<dyn ItemRequestCommand>,
    /// Item request reads.
    pub requests_query: Arc<dyn ItemRequestQuery>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Booking commands.
    pub bookings: Arc<dyn BookingCommand>,
    /// Booking reads.
    pub bookings_query: Arc<dyn BookingQuery>,
    /// Comment command.
    pub comments: Arc<dyn CommentCommand>,
    /// Item commands.
    pub items: Arc<dyn ItemCommand>,
    /// Item reads.
    pub items_query: Arc<dyn ItemQuery>,
    /// User commands.
    pub users: Arc<dyn UserCommand>,
    /// User reads.
    pub users_query: Arc<dyn UserQuery>,
    /// Item request commands.
    pub requests: Arc<dyn ItemRequestCommand>,
    /// Item request reads.
    pub requests_query: Arc<dyn ItemRequestQuery>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            bookings,
            bookings_query,
            comments,
            items,
            items_query,
            users,
            users_query,
            requests,
            requests_query,
        } = ports;
        Self {
            bookings,
            bookings_query,
            comments,
            items,
            items_query,
            users,
            users_query,
            requests,
            requests_query,
        }
    }
}
