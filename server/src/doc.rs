//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint of the inbound layer together
//! with the request and response bodies they exchange. The document backs
//! Swagger UI in debug builds and is exported by `openapi-dump`.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{BookingStatus, Error, ErrorCode};
use crate::inbound::http::bookings::{BookingBody, BookingRequestBody, ShortItemBody, ShortUserBody};
use crate::inbound::http::items::{
    BookingSummaryBody, CommentBody, CommentRequestBody, ItemBody, ItemPatchBody, NewItemBody,
};
use crate::inbound::http::requests::{ItemRequestBody, NewItemRequestBody, RequestAnswerBody};
use crate::inbound::http::sharer::SHARER_USER_ID_HEADER;
use crate::inbound::http::users::{UserBody, UserRequestBody};

/// Document the acting-user header as an API key scheme.
struct SharerHeaderAddon;

impl Modify for SharerHeaderAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SharerUserId",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                SHARER_USER_ID_HEADER,
                "Identifier of the acting user.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SharerHeaderAddon),
    info(
        title = "ShareIt server API",
        description = "Users, items, item requests, bookings and comments.",
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::bookings::add_booking,
        crate::inbound::http::bookings::process_booking,
        crate::inbound::http::bookings::get_owner_bookings,
        crate::inbound::http::bookings::get_booking,
        crate::inbound::http::bookings::get_user_bookings,
        crate::inbound::http::items::search_items,
        crate::inbound::http::items::get_item,
        crate::inbound::http::items::get_user_items,
        crate::inbound::http::items::add_item,
        crate::inbound::http::items::update_item,
        crate::inbound::http::items::delete_item,
        crate::inbound::http::items::post_comment,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::add_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::requests::add_request,
        crate::inbound::http::requests::get_user_requests,
        crate::inbound::http::requests::get_all_requests,
        crate::inbound::http::requests::get_request,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        BookingStatus,
        BookingRequestBody,
        BookingBody,
        ShortItemBody,
        ShortUserBody,
        NewItemBody,
        ItemPatchBody,
        ItemBody,
        BookingSummaryBody,
        CommentRequestBody,
        CommentBody,
        UserRequestBody,
        UserBody,
        NewItemRequestBody,
        ItemRequestBody,
        RequestAnswerBody,
    )),
    tags(
        (name = "bookings", description = "Booking requests and owner decisions"),
        (name = "items", description = "Items, search and comments"),
        (name = "users", description = "User accounts"),
        (name = "requests", description = "Requests for items not yet shared"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI schema field structure.

    use super::*;
    use rstest::rstest;
    use utoipa::OpenApi;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    /// Assert that an Object schema contains a field with the given name.
    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("Error", &["code", "message"])]
    #[case("BookingBody", &["id", "start", "end", "item", "booker", "status"])]
    #[case("ItemBody", &["id", "name", "ownerId", "lastBooking", "nextBooking", "comments"])]
    #[case("ItemRequestBody", &["id", "description", "requestorId", "created", "items"])]
    #[case("UserBody", &["id", "name", "email"])]
    fn schema_exposes_wire_fields(#[case] name: &str, #[case] fields: &[&str]) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(name).expect("schema registered");
        for field in fields {
            assert_object_schema_has_field(schema, field);
        }
    }

    #[rstest]
    #[case("/bookings/{bookingId}")]
    #[case("/bookings/owner")]
    #[case("/items/search")]
    #[case("/items/{itemId}/comment")]
    #[case("/requests/all")]
    #[case("/health/ready")]
    fn paths_are_registered(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[test]
    fn sharer_header_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("SharerUserId"));
    }
}
