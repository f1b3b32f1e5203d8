//! Gateway failures and their HTTP representation.
//!
//! Validation failures answer 400 in the same `{code, message, details}`
//! shape the server uses. A server that cannot be reached answers 502.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{debug, error};

/// Convenient result alias for gateway handlers.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Errors raised before or while forwarding a request.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The request failed a check and was not forwarded.
    #[error("{message}")]
    Validation {
        /// Offending header, parameter or body field.
        field: String,
        /// Human readable reason.
        message: String,
    },
    /// The server could not be reached or its reply could not be read.
    #[error("server unreachable: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl GatewayError {
    /// Reject `field` with `message`.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    code: &'static str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            Self::Validation { field, message } => {
                debug!(field = %field, reason = %message, "request rejected at the gateway");
                ErrorBody {
                    code: "invalid_request",
                    message,
                    details: Some(json!({ "field": field })),
                }
            }
            Self::Upstream(err) => {
                error!(error = %err, "forwarding to server failed");
                ErrorBody {
                    code: "service_unavailable",
                    message: "Server is unavailable",
                    details: None,
                }
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
