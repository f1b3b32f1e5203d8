//! Wiring of Diesel repositories into the domain services behind HTTP state.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};

use shareit_server::domain::{
    BookingService, CommentService, ItemRequestService, ItemService, UserService,
};
use shareit_server::inbound::http::state::{HttpState, HttpStatePorts};
use shareit_server::outbound::persistence::{
    DbPool, DieselBookingRepository, DieselCommentRepository, DieselItemRepository,
    DieselItemRequestRepository, DieselUserRepository,
};

/// Repositories sharing one connection pool.
struct Repositories {
    users: Arc<DieselUserRepository>,
    items: Arc<DieselItemRepository>,
    bookings: Arc<DieselBookingRepository>,
    comments: Arc<DieselCommentRepository>,
    requests: Arc<DieselItemRequestRepository>,
}

impl Repositories {
    fn new(pool: &DbPool) -> Self {
        Self {
            users: Arc::new(DieselUserRepository::new(pool.clone())),
            items: Arc::new(DieselItemRepository::new(pool.clone())),
            bookings: Arc::new(DieselBookingRepository::new(pool.clone())),
            comments: Arc::new(DieselCommentRepository::new(pool.clone())),
            requests: Arc::new(DieselItemRequestRepository::new(pool.clone())),
        }
    }
}

/// Build HTTP state whose services read and write through `pool`.
pub(super) fn build_http_state(pool: &DbPool) -> HttpState {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let repos = Repositories::new(pool);

    let bookings = Arc::new(BookingService::new(
        repos.bookings.clone(),
        repos.items.clone(),
        repos.users.clone(),
        clock.clone(),
    ));
    let comments = Arc::new(CommentService::new(
        repos.bookings.clone(),
        repos.comments.clone(),
        clock.clone(),
    ));
    let items = Arc::new(ItemService::new(
        repos.items.clone(),
        repos.users.clone(),
        repos.bookings,
        repos.comments,
        repos.requests.clone(),
        clock.clone(),
    ));
    let users = Arc::new(UserService::new(repos.users.clone()));
    let requests = Arc::new(ItemRequestService::new(
        repos.requests,
        repos.items,
        repos.users,
        clock,
    ));

    HttpState::new(HttpStatePorts {
        bookings: bookings.clone(),
        bookings_query: bookings,
        comments,
        items: items.clone(),
        items_query: items,
        users: users.clone(),
        users_query: users,
        requests: requests.clone(),
        requests_query: requests,
    })
}
