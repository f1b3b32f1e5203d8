//! Shared HTTP harness for the end-to-end suites.
//!
//! Builds the production router over in-memory repositories and a clock the
//! test controls.

#![allow(dead_code, reason = "each suite uses a subset of the helpers")]

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use actix_web::{App, web};
use chrono::{NaiveDateTime, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use serde_json::{Value, json};

use shareit_server::Trace;
use shareit_server::inbound::http::configure;
use shareit_server::inbound::http::sharer::SHARER_USER_ID_HEADER;
use shareit_server::test_support::{MutableClock, in_memory_http_state};

/// Router plus the clock driving it.
pub struct Harness {
    pub clock: Arc<MutableClock>,
}

impl Harness {
    /// Start at 2026-03-10T12:00:00Z.
    pub fn start() -> Self {
        let start = Utc
            .with_ymd_and_hms(2026, 3, 10, 12, 0, 0)
            .single()
            .expect("valid timestamp");
        Self {
            clock: Arc::new(MutableClock::new(start)),
        }
    }

    /// Current instant offset by `delta`, in wire format.
    pub fn at(&self, delta: TimeDelta) -> String {
        wire(self.now() + delta)
    }

    /// Current naive UTC instant.
    pub fn now(&self) -> NaiveDateTime {
        self.clock.utc().naive_utc()
    }
}

/// Router over a fresh in-memory store, driven by `clock`.
///
/// The returned app owns its state and does not borrow the [`Harness`].
pub fn router(
    clock: Arc<MutableClock>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let (_store, state) = in_memory_http_state(clock);
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(configure)
}

/// Format a timestamp the way the API exchanges it.
pub fn wire(instant: NaiveDateTime) -> String {
    instant.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Send `request`, acting as `user` when given, and decode the JSON body.
pub async fn send<B: MessageBody>(
    app: &impl Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    user: Option<i64>,
    request: actix_test::TestRequest,
) -> (StatusCode, Value) {
    let request = match user {
        Some(id) => request.insert_header((SHARER_USER_ID_HEADER, id.to_string())),
        None => request,
    };
    let response = actix_test::call_service(app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("JSON body")
    };
    (status, value)
}

/// Register a user and return its id.
pub async fn create_user<B: MessageBody>(
    app: &impl Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    name: &str,
    email: &str,
) -> i64 {
    let (status, body) = send(
        app,
        None,
        actix_test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": name, "email": email })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create user: {body}");
    id_of(&body)
}

/// List an item for `owner` and return its id.
pub async fn create_item<B: MessageBody>(
    app: &impl Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    owner: i64,
    name: &str,
    available: bool,
) -> i64 {
    let (status, body) = send(
        app,
        Some(owner),
        actix_test::TestRequest::post().uri("/items").set_json(json!({
            "name": name,
            "description": format!("{name} for sharing"),
            "available": available,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create item: {body}");
    id_of(&body)
}

/// Extract the numeric `id` field.
pub fn id_of(body: &Value) -> i64 {
    body.get("id").and_then(Value::as_i64).expect("id field")
}

/// Extract the error `message` field.
pub fn message_of(body: &Value) -> &str {
    body.get("message")
        .and_then(Value::as_str)
        .expect("message field")
}
