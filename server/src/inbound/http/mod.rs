//! HTTP inbound adapter exposing REST endpoints.
//!
//! Handlers translate wire payloads into domain drafts, call the driving
//! ports held in [`state::HttpState`] and map results back to JSON. Domain
//! errors become responses through [`error`].

pub mod bookings;
pub mod error;
pub mod health;
pub mod items;
pub mod requests;
pub mod sharer;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register the extractor configuration and every business route.
///
/// Literal segments (`/bookings/owner`, `/items/search`, `/requests/all`) are
/// registered ahead of their `{id}` siblings so they are never parsed as ids.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use shareit_server::inbound::http::configure;
///
/// let app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_config())
        .app_data(validation::path_config())
        .app_data(validation::query_config())
        .service(bookings::add_booking)
        .service(bookings::get_owner_bookings)
        .service(bookings::process_booking)
        .service(bookings::get_booking)
        .service(bookings::get_user_bookings)
        .service(items::search_items)
        .service(items::post_comment)
        .service(items::get_item)
        .service(items::get_user_items)
        .service(items::add_item)
        .service(items::update_item)
        .service(items::delete_item)
        .service(users::list_users)
        .service(users::get_user)
        .service(users::add_user)
        .service(users::update_user)
        .service(users::delete_user)
        .service(requests::add_request)
        .service(requests::get_all_requests)
        .service(requests::get_user_requests)
        .service(requests::get_request);
}
