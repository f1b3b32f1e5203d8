//! Request checks performed at the edge.

use chrono::{NaiveDate, NaiveDateTime};
use rstest::{fixture, rstest};
use serde_json::json;

use super::*;

#[fixture]
fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 10)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .expect("valid timestamp")
}

fn body(value: &serde_json::Value) -> Bytes {
    Bytes::from(value.to_string())
}

fn message(result: GatewayResult<()>) -> String {
    result.expect_err("check should fail").to_string()
}

#[rstest]
#[case(None)]
#[case(Some("all"))]
#[case(Some("Current"))]
#[case(Some("REJECTED"))]
fn known_categories_pass(#[case] value: Option<&str>) {
    assert!(check_category(value).is_ok());
}

#[rstest]
fn unknown_category_names_the_value() {
    assert_eq!(
        message(check_category(Some("UNSUPPORTED_STATUS"))),
        "Unknown category: UNSUPPORTED_STATUS"
    );
}

#[rstest]
#[case(Some("true"), true)]
#[case(Some("false"), true)]
#[case(Some("True"), false)]
#[case(Some("1"), false)]
#[case(None, false)]
fn approval_flag_is_literal(#[case] value: Option<&str>, #[case] accepted: bool) {
    assert_eq!(check_approval(value).is_ok(), accepted);
}

#[rstest]
#[case(1, true)]
#[case(0, false)]
#[case(-4, false)]
fn identifiers_must_be_positive(#[case] value: i64, #[case] accepted: bool) {
    assert_eq!(positive_id(value, "itemId").is_ok(), accepted);
}

#[rstest]
#[case(json!({"itemId": 1, "start": "2026-03-10T12:00:00", "end": "2026-03-11T12:00:00"}), None)]
#[case(json!({"start": "2026-03-11T10:00:00", "end": "2026-03-12T10:00:00"}), Some("missing required field: itemId"))]
#[case(json!({"itemId": 0, "start": "2026-03-11T10:00:00", "end": "2026-03-12T10:00:00"}), Some("itemId must be a positive integer"))]
#[case(json!({"itemId": 1, "end": "2026-03-12T10:00:00"}), Some("missing required field: start"))]
#[case(json!({"itemId": 1, "start": "2026-03-09T10:00:00", "end": "2026-03-12T10:00:00"}), Some("start must not be in the past"))]
#[case(json!({"itemId": 1, "start": "2026-03-11T10:00:00", "end": "2026-03-10T12:00:00"}), Some("end must be in the future"))]
#[case(json!({"itemId": 1, "start": "tomorrow", "end": "2026-03-12T10:00:00"}), Some("start must be a timestamp formatted as YYYY-MM-DDTHH:MM:SS"))]
fn booking_window_is_checked_against_now(
    now: NaiveDateTime,
    #[case] payload: serde_json::Value,
    #[case] expected: Option<&str>,
) {
    let decoded: BookingPayload = decode(&body(&payload)).expect("decodes");
    let result = decoded.check(now);
    match expected {
        None => assert!(result.is_ok()),
        Some(text) => assert_eq!(message(result), text),
    }
}

#[rstest]
fn equal_start_and_end_pass_the_edge(now: NaiveDateTime) {
    let payload: BookingPayload = decode(&body(&json!({
        "itemId": 3,
        "start": "2026-03-11T10:00:00",
        "end": "2026-03-11T10:00:00",
    })))
    .expect("decodes");
    assert!(payload.check(now).is_ok());
}

#[rstest]
#[case(json!({"name": "Ada", "email": "ada@example.com"}), None)]
#[case(json!({"email": "ada@example.com"}), Some("missing required field: name"))]
#[case(json!({"name": "  ", "email": "ada@example.com"}), Some("name must not be blank"))]
#[case(json!({"name": "Ada"}), Some("missing required field: email"))]
#[case(json!({"name": "Ada", "email": "ada.example.com"}), Some("ada.example.com is not a valid email address"))]
#[case(json!({"name": "Ada", "email": "ada @example.com"}), Some("ada @example.com is not a valid email address"))]
fn new_users_need_name_and_email(
    #[case] payload: serde_json::Value,
    #[case] expected: Option<&str>,
) {
    let decoded: UserPayload = decode(&body(&payload)).expect("decodes");
    match expected {
        None => assert!(decoded.check_new().is_ok()),
        Some(text) => assert_eq!(message(decoded.check_new()), text),
    }
}

#[rstest]
fn email_pattern_compiles() {
    let pattern = EMAIL.as_ref().expect("email pattern is valid");
    assert!(pattern.is_match("ada@mail.example.com"));
    assert!(!pattern.is_match("ada@"));
}

#[rstest]
#[case(json!({}), true)]
#[case(json!({"name": "Grace"}), true)]
#[case(json!({"email": "grace@example.com"}), true)]
#[case(json!({"email": "grace"}), false)]
#[case(json!({"name": ""}), false)]
fn user_updates_check_present_fields(#[case] payload: serde_json::Value, #[case] accepted: bool) {
    let decoded: UserPayload = decode(&body(&payload)).expect("decodes");
    assert_eq!(decoded.check_update().is_ok(), accepted);
}

#[rstest]
#[case(json!({"name": "Drill", "description": "Cordless", "available": true}), None)]
#[case(json!({"name": "Drill", "description": "Cordless", "available": false, "requestId": 4}), None)]
#[case(json!({"description": "Cordless", "available": true}), Some("missing required field: name"))]
#[case(json!({"name": "Drill", "description": " ", "available": true}), Some("description must not be blank"))]
#[case(json!({"name": "Drill", "description": "Cordless"}), Some("missing required field: available"))]
#[case(json!({"name": "Drill", "description": "Cordless", "available": true, "requestId": -1}), Some("requestId must be a positive integer"))]
fn new_items_need_every_field(#[case] payload: serde_json::Value, #[case] expected: Option<&str>) {
    let decoded: ItemPayload = decode(&body(&payload)).expect("decodes");
    match expected {
        None => assert!(decoded.check_new().is_ok()),
        Some(text) => assert_eq!(message(decoded.check_new()), text),
    }
}

#[rstest]
fn comments_and_requests_need_text() {
    let comment: CommentPayload = decode(&body(&json!({"text": "\t"}))).expect("decodes");
    assert_eq!(message(comment.check()), "text must not be blank");

    let request: ItemRequestPayload = decode(&body(&json!({}))).expect("decodes");
    assert_eq!(
        message(request.check()),
        "missing required field: description"
    );
}

#[rstest]
fn malformed_json_is_rejected() {
    let err = decode::<CommentPayload>(&Bytes::from_static(b"{not json"))
        .expect_err("decoding should fail");
    assert!(err.to_string().starts_with("malformed request body"));
}
