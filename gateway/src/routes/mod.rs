//! Route table mirroring the server's REST surface.

pub mod bookings;
pub mod items;
pub mod requests;
pub mod users;

use actix_web::web;

use crate::error::GatewayError;

/// Register every forwarded route.
///
/// Literal segments are registered ahead of their `{id}` siblings, exactly as
/// on the server.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(|err, _req| {
        GatewayError::validation("path", format!("malformed path: {err}")).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        GatewayError::validation("query", format!("malformed query: {err}")).into()
    }))
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
