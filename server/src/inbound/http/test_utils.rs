//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::ports::{
    MockBookingCommand, MockBookingQuery, MockCommentCommand, MockItemCommand, MockItemQuery,
    MockItemRequestCommand, MockItemRequestQuery, MockUserCommand, MockUserQuery,
};
use crate::inbound::http::configure;
use crate::inbound::http::state::{HttpState, HttpStatePorts};

/// Driving-port doubles; tests set expectations on the ones they exercise.
#[derive(Default)]
pub struct MockPorts {
    /// Booking commands.
    pub bookings: MockBookingCommand,
    /// Booking reads.
    pub bookings_query: MockBookingQuery,
    /// Comment command.
    pub comments: MockCommentCommand,
    /// Item commands.
    pub items: MockItemCommand,
    /// Item reads.
    pub items_query: MockItemQuery,
    /// User commands.
    pub users: MockUserCommand,
    /// User reads.
    pub users_query: MockUserQuery,
    /// Item request commands.
    pub requests: MockItemRequestCommand,
    /// Item request reads.
    pub requests_query: MockItemRequestQuery,
}

impl MockPorts {
    /// Wrap the doubles into handler state.
    pub fn into_state(self) -> HttpState {
        HttpState::new(HttpStatePorts {
            bookings: Arc::new(self.bookings),
            bookings_query: Arc::new(self.bookings_query),
            comments: Arc::new(self.comments),
            items: Arc::new(self.items),
            items_query: Arc::new(self.items_query),
            users: Arc::new(self.users),
            users_query: Arc::new(self.users_query),
            requests: Arc::new(self.requests),
            requests_query: Arc::new(self.requests_query),
        })
    }

    /// Build an application serving every route over these doubles.
    pub fn into_app(
        self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.into_state()))
            .configure(configure)
    }
}
