//! Caller identity taken from the `X-Sharer-User-Id` header.
//!
//! Every user-scoped endpoint names the acting user through this header. The
//! extractor rejects a missing or non-positive value before any handler runs.

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::{Ready, ready};
use serde_json::json;

use crate::domain::{Error, UserId};

/// Header carrying the acting user's identifier.
pub const SHARER_USER_ID_HEADER: &str = "X-Sharer-User-Id";

/// Acting user resolved from [`SHARER_USER_ID_HEADER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharerUserId(UserId);

impl SharerUserId {
    /// Identifier of the acting user.
    #[must_use]
    pub fn user_id(self) -> UserId {
        self.0
    }

    fn from_header(req: &HttpRequest) -> Result<Self, Error> {
        let raw = req
            .headers()
            .get(SHARER_USER_ID_HEADER)
            .ok_or_else(|| {
                Error::invalid_request(format!("missing required header: {SHARER_USER_ID_HEADER}"))
                    .with_details(json!({
                        "field": SHARER_USER_ID_HEADER,
                        "code": "missing_header",
                    }))
            })?;
        raw.to_str()
            .ok()
            .and_then(|value| value.trim().parse::<i64>().ok())
            .filter(|id| *id > 0)
            .map(|id| Self(UserId::new(id)))
            .ok_or_else(|| {
                Error::invalid_request(format!(
                    "{SHARER_USER_ID_HEADER} must be a positive integer"
                ))
                .with_details(json!({
                    "field": SHARER_USER_ID_HEADER,
                    "code": "invalid_header",
                }))
            })
    }
}

impl FromRequest for SharerUserId {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::from_header(req))
    }
}
