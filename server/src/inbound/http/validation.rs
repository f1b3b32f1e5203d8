//! Shared validation helpers for inbound HTTP adapters.

use actix_web::{HttpRequest, web};
use chrono::NaiveDateTime;
use serde_json::json;

use crate::domain::{ApprovalDecision, BookingCategory, Error};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    BlankField,
    InvalidTimestamp,
    InvalidId,
    UnknownCategory,
    InvalidApproval,
    MalformedRequest,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::BlankField => "blank_field",
            ErrorCode::InvalidTimestamp => "invalid_timestamp",
            ErrorCode::InvalidId => "invalid_id",
            ErrorCode::UnknownCategory => "unknown_category",
            ErrorCode::InvalidApproval => "invalid_approval",
            ErrorCode::MalformedRequest => "malformed_request",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

/// Require a present, non-blank text field.
pub(crate) fn require_text(value: Option<String>, field: FieldName) -> Result<String, Error> {
    let text = require(value, field)?;
    if text.trim().is_empty() {
        let name = field.as_str();
        return Err(ValidationError::new(name, format!("{name} must not be blank"))
            .with_code(ErrorCode::BlankField));
    }
    Ok(text)
}

pub(crate) fn invalid_timestamp_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(
        field,
        format!("{field} must be a timestamp formatted as YYYY-MM-DDTHH:MM:SS"),
    )
    .with_value(ErrorCode::InvalidTimestamp, value)
}

/// Parse a naive ISO-8601 timestamp; fractional seconds are accepted.
pub(crate) fn parse_timestamp(value: String, field: FieldName) -> Result<NaiveDateTime, Error> {
    NaiveDateTime::parse_from_str(&value, "%Y-%m-%dT%H:%M:%S%.f")
        .map_err(|_| invalid_timestamp_error(field, &value))
}

/// Accept only strictly positive identifiers.
pub(crate) fn positive_id(value: i64, field: FieldName) -> Result<i64, Error> {
    if value > 0 {
        Ok(value)
    } else {
        let name = field.as_str();
        Err(
            ValidationError::new(name, format!("{name} must be a positive integer"))
                .with_value(ErrorCode::InvalidId, value.to_string()),
        )
    }
}

/// Parse the `category` query parameter, defaulting to `ALL`.
pub(crate) fn parse_category(value: Option<&str>) -> Result<BookingCategory, Error> {
    match value {
        None => Ok(BookingCategory::default()),
        Some(raw) => raw.parse().map_err(|err: crate::domain::UnknownBookingCategory| {
            ValidationError::new("category", err.to_string())
                .with_value(ErrorCode::UnknownCategory, raw)
        }),
    }
}

/// Parse the `approved` query parameter into an owner decision.
pub(crate) fn parse_approval(value: Option<&str>) -> Result<ApprovalDecision, Error> {
    let raw = value.unwrap_or_default();
    raw.parse().map_err(|err: crate::domain::InvalidApprovalFlag| {
        ValidationError::new("approved", err.to_string())
            .with_value(ErrorCode::InvalidApproval, raw)
    })
}

fn malformed(part: &'static str, detail: String) -> actix_web::Error {
    ValidationError::new(part, format!("malformed {part}: {detail}"))
        .with_code(ErrorCode::MalformedRequest)
        .into()
}

/// JSON extractor configuration reporting bad bodies as `invalid_request`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req: &HttpRequest| malformed("body", err.to_string()))
}

/// Path extractor configuration reporting bad identifiers as `invalid_request`.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req: &HttpRequest| malformed("path", err.to_string()))
}

/// Query extractor configuration reporting bad parameters as `invalid_request`.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req: &HttpRequest| malformed("query", err.to_string()))
}
