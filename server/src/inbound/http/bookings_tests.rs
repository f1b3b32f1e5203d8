//! Tests for booking HTTP handlers.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use chrono::{NaiveDate, NaiveDateTime};
use mockall::predicate::eq;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::{ApprovalDecision, BookingCategory, ItemSummary, UserId, UserSummary};
use crate::inbound::http::sharer::SHARER_USER_ID_HEADER;
use crate::inbound::http::test_utils::MockPorts;

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, day)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .expect("valid timestamp")
}

fn booking(status: BookingStatus) -> Booking {
    Booking {
        id: BookingId::new(5),
        start: at(11, 10),
        end: at(12, 10),
        item: ItemSummary {
            id: ItemId::new(3),
            name: "Drill".to_owned(),
            owner_id: UserId::new(2),
        },
        booker: UserSummary {
            id: UserId::new(1),
            name: "Ada".to_owned(),
        },
        status,
    }
}

async fn call(ports: MockPorts, request: actix_test::TestRequest) -> (StatusCode, Value) {
    let app = actix_test::init_service(ports.into_app()).await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("JSON body")
    };
    (status, value)
}

#[rstest]
#[actix_web::test]
async fn add_booking_returns_nested_shape() {
    let mut ports = MockPorts::default();
    ports
        .bookings
        .expect_add_booking()
        .withf(|booker, draft| {
            *booker == UserId::new(1)
                && draft.item_id == ItemId::new(3)
                && draft.start == at(11, 10)
        })
        .return_once(|_, _| Ok(booking(BookingStatus::Waiting)));
    let request = actix_test::TestRequest::post()
        .uri("/bookings")
        .insert_header((SHARER_USER_ID_HEADER, "1"))
        .set_json(json!({
            "itemId": 3,
            "start": "2026-03-11T10:00:00",
            "end": "2026-03-12T10:00:00",
        }));

    let (status, body) = call(ports, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 5,
            "start": "2026-03-11T10:00:00",
            "end": "2026-03-12T10:00:00",
            "item": {"id": 3, "name": "Drill"},
            "booker": {"id": 1, "name": "Ada"},
            "status": "WAITING",
        })
    );
}

#[rstest]
#[actix_web::test]
async fn missing_sharer_header_never_reaches_the_engine() {
    let mut ports = MockPorts::default();
    ports.bookings.expect_add_booking().times(0);
    let request = actix_test::TestRequest::post().uri("/bookings").set_json(json!({
        "itemId": 3,
        "start": "2026-03-11T10:00:00",
        "end": "2026-03-12T10:00:00",
    }));

    let (status, body) = call(ports, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.get("code").and_then(Value::as_str), Some("invalid_request"));
}

#[rstest]
#[case(json!({"start": "2026-03-11T10:00:00", "end": "2026-03-12T10:00:00"}), "itemId")]
#[case(json!({"itemId": 0, "start": "2026-03-11T10:00:00", "end": "2026-03-12T10:00:00"}), "itemId")]
#[case(json!({"itemId": 3, "end": "2026-03-12T10:00:00"}), "start")]
#[case(json!({"itemId": 3, "start": "tomorrow", "end": "2026-03-12T10:00:00"}), "start")]
#[actix_web::test]
async fn malformed_booking_body_is_rejected(#[case] payload: Value, #[case] field: &str) {
    let mut ports = MockPorts::default();
    ports.bookings.expect_add_booking().times(0);
    let request = actix_test::TestRequest::post()
        .uri("/bookings")
        .insert_header((SHARER_USER_ID_HEADER, "1"))
        .set_json(payload);

    let (status, body) = call(ports, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body.pointer("/details/field").and_then(Value::as_str),
        Some(field)
    );
}

#[rstest]
#[case("true", ApprovalDecision::Approve, BookingStatus::Approved)]
#[case("false", ApprovalDecision::Reject, BookingStatus::Rejected)]
#[actix_web::test]
async fn process_booking_forwards_decision(
    #[case] flag: &str,
    #[case] decision: ApprovalDecision,
    #[case] status: BookingStatus,
) {
    let mut ports = MockPorts::default();
    ports
        .bookings
        .expect_process_booking()
        .with(eq(BookingId::new(5)), eq(UserId::new(2)), eq(decision))
        .return_once(move |_, _, _| Ok(booking(status)));
    let request = actix_test::TestRequest::patch()
        .uri(&format!("/bookings/5?approved={flag}"))
        .insert_header((SHARER_USER_ID_HEADER, "2"));

    let (code, body) = call(ports, request).await;

    assert_eq!(code, StatusCode::OK);
    assert_eq!(body.get("status").and_then(Value::as_str), Some(status.as_str()));
}

#[rstest]
#[case("/bookings/5?approved=yes")]
#[case("/bookings/5")]
#[actix_web::test]
async fn invalid_approval_flag_is_rejected(#[case] uri: &str) {
    let mut ports = MockPorts::default();
    ports.bookings.expect_process_booking().times(0);
    let request = actix_test::TestRequest::patch()
        .uri(uri)
        .insert_header((SHARER_USER_ID_HEADER, "2"));

    let (status, body) = call(ports, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some("Invalid 'approved' parameter value (can be true or false)")
    );
}

#[rstest]
#[actix_web::test]
async fn rule_violation_maps_to_bad_request() {
    let mut ports = MockPorts::default();
    ports.bookings_query.expect_get_booking().return_once(|_, _| {
        Err(Error::invalid_request(
            "You must be a booker or item owner to get booking info",
        ))
    });
    let request = actix_test::TestRequest::get()
        .uri("/bookings/5")
        .insert_header((SHARER_USER_ID_HEADER, "3"));

    let (status, body) = call(ports, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some("You must be a booker or item owner to get booking info")
    );
}

#[rstest]
#[case("/bookings", BookingCategory::All)]
#[case("/bookings?category=current", BookingCategory::Current)]
#[case("/bookings?category=PAST", BookingCategory::Past)]
#[actix_web::test]
async fn booker_list_parses_category(#[case] uri: &str, #[case] category: BookingCategory) {
    let mut ports = MockPorts::default();
    ports
        .bookings_query
        .expect_get_user_bookings()
        .with(eq(UserId::new(1)), eq(category))
        .return_once(|_, _| Ok(vec![booking(BookingStatus::Approved)]));
    let request = actix_test::TestRequest::get()
        .uri(uri)
        .insert_header((SHARER_USER_ID_HEADER, "1"));

    let (status, body) = call(ports, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
}

#[rstest]
#[actix_web::test]
async fn owner_route_is_not_a_booking_id() {
    let mut ports = MockPorts::default();
    ports.bookings_query.expect_get_booking().times(0);
    ports
        .bookings_query
        .expect_get_user_items_bookings()
        .with(eq(UserId::new(2)), eq(BookingCategory::Waiting))
        .return_once(|_, _| Ok(Vec::new()));
    let request = actix_test::TestRequest::get()
        .uri("/bookings/owner?category=waiting")
        .insert_header((SHARER_USER_ID_HEADER, "2"));

    let (status, body) = call(ports, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[rstest]
#[actix_web::test]
async fn unknown_category_is_reported_verbatim() {
    let mut ports = MockPorts::default();
    ports.bookings_query.expect_get_user_bookings().times(0);
    let request = actix_test::TestRequest::get()
        .uri("/bookings?category=UNSUPPORTED_STATUS")
        .insert_header((SHARER_USER_ID_HEADER, "1"));

    let (status, body) = call(ports, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some("Unknown category: UNSUPPORTED_STATUS")
    );
}
