//! End-to-end booking flows through the HTTP router.
//!
//! Runs against in-memory repositories with a controllable clock, so every
//! time-dependent rule can be driven deterministically.

mod support;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use chrono::TimeDelta;
use rstest::rstest;
use serde_json::{Value, json};

use support::{Harness, create_item, create_user, id_of, message_of, router, send};

fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .expect("array body")
        .iter()
        .map(id_of)
        .collect()
}

#[rstest]
#[actix_web::test]
async fn booking_lifecycle_from_request_to_comment() {
    let harness = Harness::start();
    let app = actix_test::init_service(router(Arc::clone(&harness.clock))).await;
    let booker = create_user(&app, "Ada", "ada@example.com").await;
    let owner = create_user(&app, "Grace", "grace@example.com").await;
    let item = create_item(&app, owner, "Drill", true).await;

    // Booker requests the item for tomorrow.
    let (status, booking) = send(
        &app,
        Some(booker),
        actix_test::TestRequest::post().uri("/bookings").set_json(json!({
            "itemId": item,
            "start": harness.at(TimeDelta::days(1)),
            "end": harness.at(TimeDelta::days(2)),
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{booking}");
    assert_eq!(booking["status"], "WAITING");
    assert_eq!(booking["booker"], json!({ "id": booker, "name": "Ada" }));
    assert_eq!(booking["item"], json!({ "id": item, "name": "Drill" }));
    let booking_id = id_of(&booking);

    // Owner approves.
    let (status, approved) = send(
        &app,
        Some(owner),
        actix_test::TestRequest::patch().uri(&format!("/bookings/{booking_id}?approved=true")),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{approved}");
    assert_eq!(approved["status"], "APPROVED");

    // Commenting before the rental ends is refused.
    let (status, refused) = send(
        &app,
        Some(booker),
        actix_test::TestRequest::post()
            .uri(&format!("/items/{item}/comment"))
            .set_json(json!({ "text": "Great!" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message_of(&refused), "User did not end the rent");

    // Once the rental is over the comment is accepted.
    harness.clock.advance(TimeDelta::days(3));
    let (status, comment) = send(
        &app,
        Some(booker),
        actix_test::TestRequest::post()
            .uri(&format!("/items/{item}/comment"))
            .set_json(json!({ "text": "Great!" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{comment}");
    assert_eq!(comment["text"], "Great!");
    assert_eq!(comment["authorName"], "Ada");
    assert_eq!(comment["created"], harness.at(TimeDelta::zero()));

    // The owner sees the comment and the finished booking on the item.
    let (status, details) = send(
        &app,
        Some(owner),
        actix_test::TestRequest::get().uri(&format!("/items/{item}")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(details["lastBooking"]["id"], booking_id);
    assert_eq!(details["lastBooking"]["bookerId"], booker);
    assert_eq!(details["nextBooking"], Value::Null);
    assert_eq!(ids(&details["comments"]), vec![id_of(&comment)]);
}

#[rstest]
#[actix_web::test]
async fn processed_booking_cannot_be_decided_again() {
    let harness = Harness::start();
    let app = actix_test::init_service(router(Arc::clone(&harness.clock))).await;
    let booker = create_user(&app, "Ada", "ada@example.com").await;
    let owner = create_user(&app, "Grace", "grace@example.com").await;
    let item = create_item(&app, owner, "Drill", true).await;
    let (_, booking) = send(
        &app,
        Some(booker),
        actix_test::TestRequest::post().uri("/bookings").set_json(json!({
            "itemId": item,
            "start": harness.at(TimeDelta::days(1)),
            "end": harness.at(TimeDelta::days(2)),
        })),
    )
    .await;
    let booking_id = id_of(&booking);
    let decide = |flag: &str| {
        actix_test::TestRequest::patch().uri(&format!("/bookings/{booking_id}?approved={flag}"))
    };

    let (status, _) = send(&app, Some(owner), decide("false")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = send(&app, Some(owner), decide("true")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        message_of(&body),
        format!("Booking {booking_id} has already been processed")
    );
    let (_, current) = send(
        &app,
        Some(booker),
        actix_test::TestRequest::get().uri(&format!("/bookings/{booking_id}")),
    )
    .await;
    assert_eq!(current["status"], "REJECTED");
}

#[rstest]
#[actix_web::test]
async fn only_owner_may_decide_and_only_parties_may_read() {
    let harness = Harness::start();
    let app = actix_test::init_service(router(Arc::clone(&harness.clock))).await;
    let booker = create_user(&app, "Ada", "ada@example.com").await;
    let owner = create_user(&app, "Grace", "grace@example.com").await;
    let stranger = create_user(&app, "Linus", "linus@example.com").await;
    let item = create_item(&app, owner, "Drill", true).await;
    let (_, booking) = send(
        &app,
        Some(booker),
        actix_test::TestRequest::post().uri("/bookings").set_json(json!({
            "itemId": item,
            "start": harness.at(TimeDelta::days(1)),
            "end": harness.at(TimeDelta::days(2)),
        })),
    )
    .await;
    let booking_id = id_of(&booking);

    let (status, body) = send(
        &app,
        Some(stranger),
        actix_test::TestRequest::get().uri(&format!("/bookings/{booking_id}")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        message_of(&body),
        "You must be a booker or item owner to get booking info"
    );

    let (status, body) = send(
        &app,
        Some(booker),
        actix_test::TestRequest::patch().uri(&format!("/bookings/{booking_id}?approved=true")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message_of(&body), "Item requests can be approved by item owner");

    for reader in [booker, owner] {
        let (status, _) = send(
            &app,
            Some(reader),
            actix_test::TestRequest::get().uri(&format!("/bookings/{booking_id}")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
}

#[rstest]
#[actix_web::test]
async fn unavailable_item_is_not_booked() {
    let harness = Harness::start();
    let app = actix_test::init_service(router(Arc::clone(&harness.clock))).await;
    let booker = create_user(&app, "Ada", "ada@example.com").await;
    let owner = create_user(&app, "Grace", "grace@example.com").await;
    let item = create_item(&app, owner, "Ladder", false).await;

    let (status, body) = send(
        &app,
        Some(booker),
        actix_test::TestRequest::post().uri("/bookings").set_json(json!({
            "itemId": item,
            "start": harness.at(TimeDelta::days(1)),
            "end": harness.at(TimeDelta::days(2)),
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message_of(&body), "Cannot book unavailable item");
    let (status, listed) = send(
        &app,
        Some(booker),
        actix_test::TestRequest::get().uri("/bookings"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([]));
}

#[rstest]
#[actix_web::test]
async fn equal_start_and_end_is_refused() {
    let harness = Harness::start();
    let app = actix_test::init_service(router(Arc::clone(&harness.clock))).await;
    let booker = create_user(&app, "Ada", "ada@example.com").await;
    let owner = create_user(&app, "Grace", "grace@example.com").await;
    let item = create_item(&app, owner, "Drill", true).await;
    let instant = harness.at(TimeDelta::days(1));

    let (status, body) = send(
        &app,
        Some(booker),
        actix_test::TestRequest::post().uri("/bookings").set_json(json!({
            "itemId": item,
            "start": instant,
            "end": instant,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message_of(&body), "Start time cannot be equal to end time");
}

#[rstest]
#[case("CURRENT", true)]
#[case("current", true)]
#[case("PAST", false)]
#[case("FUTURE", false)]
#[case("WAITING", true)]
#[case("REJECTED", false)]
#[case("ALL", true)]
#[actix_web::test]
async fn ongoing_booking_falls_in_current_only(#[case] category: &str, #[case] listed: bool) {
    let harness = Harness::start();
    let app = actix_test::init_service(router(Arc::clone(&harness.clock))).await;
    let booker = create_user(&app, "Ada", "ada@example.com").await;
    let owner = create_user(&app, "Grace", "grace@example.com").await;
    let item = create_item(&app, owner, "Drill", true).await;
    let (_, booking) = send(
        &app,
        Some(booker),
        actix_test::TestRequest::post().uri("/bookings").set_json(json!({
            "itemId": item,
            "start": harness.at(-TimeDelta::hours(1)),
            "end": harness.at(TimeDelta::hours(1)),
        })),
    )
    .await;
    let expected = if listed { vec![id_of(&booking)] } else { Vec::new() };

    for (user, uri) in [
        (booker, format!("/bookings?category={category}")),
        (owner, format!("/bookings/owner?category={category}")),
    ] {
        let (status, body) = send(&app, Some(user), actix_test::TestRequest::get().uri(&uri)).await;
        assert_eq!(status, StatusCode::OK, "{uri}: {body}");
        assert_eq!(ids(&body), expected, "{uri}");
    }
}

#[rstest]
#[actix_web::test]
async fn lists_are_ordered_by_start_descending() {
    let harness = Harness::start();
    let app = actix_test::init_service(router(Arc::clone(&harness.clock))).await;
    let booker = create_user(&app, "Ada", "ada@example.com").await;
    let owner = create_user(&app, "Grace", "grace@example.com").await;
    let item = create_item(&app, owner, "Drill", true).await;
    let mut created = Vec::new();
    for offset in [3, 1, 2] {
        let (_, booking) = send(
            &app,
            Some(booker),
            actix_test::TestRequest::post().uri("/bookings").set_json(json!({
                "itemId": item,
                "start": harness.at(TimeDelta::days(offset)),
                "end": harness.at(TimeDelta::days(offset) + TimeDelta::hours(2)),
            })),
        )
        .await;
        created.push(id_of(&booking));
    }

    let (_, body) = send(
        &app,
        Some(booker),
        actix_test::TestRequest::get().uri("/bookings?category=FUTURE"),
    )
    .await;

    let expected: Vec<i64> = [0, 2, 1].iter().filter_map(|i| created.get(*i).copied()).collect();
    assert_eq!(ids(&body), expected);
}

#[rstest]
#[actix_web::test]
async fn owner_without_items_gets_empty_list() {
    let harness = Harness::start();
    let app = actix_test::init_service(router(Arc::clone(&harness.clock))).await;
    let user = create_user(&app, "Ada", "ada@example.com").await;

    let (status, body) = send(
        &app,
        Some(user),
        actix_test::TestRequest::get().uri("/bookings/owner"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[rstest]
#[case("/bookings?category=SOMETIME", Some(1), "Unknown category: SOMETIME")]
#[case("/bookings", None, "missing required header: X-Sharer-User-Id")]
#[actix_web::test]
async fn boundary_rejects_bad_requests(
    #[case] uri: &str,
    #[case] user: Option<i64>,
    #[case] message: &str,
) {
    let harness = Harness::start();
    let app = actix_test::init_service(router(Arc::clone(&harness.clock))).await;
    create_user(&app, "Ada", "ada@example.com").await;

    let (status, body) = send(&app, user, actix_test::TestRequest::get().uri(uri)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message_of(&body), message);
}

#[rstest]
#[actix_web::test]
async fn unknown_booker_is_not_found() {
    let harness = Harness::start();
    let app = actix_test::init_service(router(Arc::clone(&harness.clock))).await;

    let (status, body) = send(
        &app,
        Some(999),
        actix_test::TestRequest::get().uri("/bookings"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message_of(&body), "User with id 999 not found");
}
