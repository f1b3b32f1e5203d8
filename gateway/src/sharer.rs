//! Acting user taken from the `X-Sharer-User-Id` header.

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::{Ready, ready};

use crate::error::GatewayError;

/// Header carrying the acting user's identifier.
pub const SHARER_USER_ID_HEADER: &str = "X-Sharer-User-Id";

/// Proof that the request names a positive acting user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharerUserId(i64);

impl SharerUserId {
    /// Identifier of the acting user.
    #[must_use]
    pub fn get(self) -> i64 {
        self.0
    }
}

fn from_header(req: &HttpRequest) -> Result<SharerUserId, GatewayError> {
    let raw = req.headers().get(SHARER_USER_ID_HEADER).ok_or_else(|| {
        GatewayError::validation(
            SHARER_USER_ID_HEADER,
            format!("missing required header: {SHARER_USER_ID_HEADER}"),
        )
    })?;
    raw.to_str()
        .ok()
        .and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|id| *id > 0)
        .map(SharerUserId)
        .ok_or_else(|| {
            GatewayError::validation(
                SHARER_USER_ID_HEADER,
                format!("{SHARER_USER_ID_HEADER} must be a positive integer"),
            )
        })
}

impl FromRequest for SharerUserId {
    type Error = GatewayError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(from_header(req))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Some("7"), Some(7))]
    #[case(Some(" 12 "), Some(12))]
    #[case(None, None)]
    #[case(Some("0"), None)]
    #[case(Some("-1"), None)]
    #[case(Some("abc"), None)]
    fn header_must_hold_positive_id(#[case] header: Option<&str>, #[case] expected: Option<i64>) {
        let mut request = TestRequest::default();
        if let Some(value) = header {
            request = request.insert_header((SHARER_USER_ID_HEADER, value));
        }
        let parsed = from_header(&request.to_http_request()).ok().map(SharerUserId::get);
        assert_eq!(parsed, expected);
    }
}
