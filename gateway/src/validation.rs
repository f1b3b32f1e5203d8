//! Checks applied before a request is forwarded.
//!
//! Payloads are decoded into permissive shapes where every field is optional,
//! so a missing field is reported by name instead of as a decoding failure.
//! The raw bytes, not the decoded value, are what the server receives.

use std::sync::LazyLock;

use actix_web::web::Bytes;
use chrono::NaiveDateTime;
use regex::Regex;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{GatewayError, GatewayResult};

const CATEGORIES: [&str; 6] = ["ALL", "CURRENT", "PAST", "FUTURE", "WAITING", "REJECTED"];

static EMAIL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)*$").ok());

/// Accept only strictly positive identifiers.
pub(crate) fn positive_id(value: i64, field: &str) -> GatewayResult<i64> {
    if value > 0 {
        Ok(value)
    } else {
        Err(GatewayError::validation(
            field,
            format!("{field} must be a positive integer"),
        ))
    }
}

/// Accept an absent category or one of the six names in any case.
pub(crate) fn check_category(value: Option<&str>) -> GatewayResult<()> {
    match value {
        Some(raw) if !CATEGORIES.iter().any(|name| name.eq_ignore_ascii_case(raw)) => Err(
            GatewayError::validation("category", format!("Unknown category: {raw}")),
        ),
        _ => Ok(()),
    }
}

/// Accept exactly `true` or `false`.
pub(crate) fn check_approval(value: Option<&str>) -> GatewayResult<()> {
    match value {
        Some("true" | "false") => Ok(()),
        _ => Err(GatewayError::validation(
            "approved",
            "Invalid 'approved' parameter value (can be true or false)",
        )),
    }
}

/// Decode a JSON body for inspection.
pub(crate) fn decode<T: DeserializeOwned>(body: &Bytes) -> GatewayResult<T> {
    serde_json::from_slice(body)
        .map_err(|err| GatewayError::validation("body", format!("malformed request body: {err}")))
}

fn require<T>(value: Option<T>, field: &str) -> GatewayResult<T> {
    value.ok_or_else(|| GatewayError::validation(field, format!("missing required field: {field}")))
}

fn non_blank(value: Option<&str>, field: &str) -> GatewayResult<()> {
    if require(value, field)?.trim().is_empty() {
        return Err(GatewayError::validation(
            field,
            format!("{field} must not be blank"),
        ));
    }
    Ok(())
}

fn timestamp(value: Option<&str>, field: &str) -> GatewayResult<NaiveDateTime> {
    let raw = require(value, field)?;
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map_err(|_| {
        GatewayError::validation(
            field,
            format!("{field} must be a timestamp formatted as YYYY-MM-DDTHH:MM:SS"),
        )
    })
}

fn email(value: &str) -> GatewayResult<()> {
    let valid = EMAIL.as_ref().is_some_and(|pattern| pattern.is_match(value));
    if valid {
        Ok(())
    } else {
        Err(GatewayError::validation(
            "email",
            format!("{value} is not a valid email address"),
        ))
    }
}

/// Booking request body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookingPayload {
    item_id: Option<i64>,
    start: Option<String>,
    end: Option<String>,
}

impl BookingPayload {
    /// Require a positive item, a start not in the past and an end in the
    /// future relative to `now`.
    pub(crate) fn check(&self, now: NaiveDateTime) -> GatewayResult<()> {
        positive_id(require(self.item_id, "itemId")?, "itemId")?;
        let start = timestamp(self.start.as_deref(), "start")?;
        let end = timestamp(self.end.as_deref(), "end")?;
        if start < now {
            return Err(GatewayError::validation(
                "start",
                "start must not be in the past",
            ));
        }
        if end <= now {
            return Err(GatewayError::validation("end", "end must be in the future"));
        }
        Ok(())
    }
}

/// User create and update body.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct UserPayload {
    name: Option<String>,
    email: Option<String>,
}

impl UserPayload {
    /// A new user needs a name and a well-formed email.
    pub(crate) fn check_new(&self) -> GatewayResult<()> {
        non_blank(self.name.as_deref(), "name")?;
        email(require(self.email.as_deref(), "email")?)
    }

    /// An update checks only the fields it carries.
    pub(crate) fn check_update(&self) -> GatewayResult<()> {
        if let Some(name) = self.name.as_deref() {
            non_blank(Some(name), "name")?;
        }
        self.email.as_deref().map_or(Ok(()), email)
    }
}

/// Item create body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ItemPayload {
    name: Option<String>,
    description: Option<String>,
    available: Option<bool>,
    request_id: Option<i64>,
}

impl ItemPayload {
    /// Require name, description and availability; a request id must be
    /// positive when given.
    pub(crate) fn check_new(&self) -> GatewayResult<()> {
        non_blank(self.name.as_deref(), "name")?;
        non_blank(self.description.as_deref(), "description")?;
        require(self.available, "available")?;
        if let Some(id) = self.request_id {
            positive_id(id, "requestId")?;
        }
        Ok(())
    }
}

/// Comment body.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CommentPayload {
    text: Option<String>,
}

impl CommentPayload {
    /// Require non-blank text.
    pub(crate) fn check(&self) -> GatewayResult<()> {
        non_blank(self.text.as_deref(), "text")
    }
}

/// Item request body.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ItemRequestPayload {
    description: Option<String>,
}

impl ItemRequestPayload {
    /// Require a non-blank description.
    pub(crate) fn check(&self) -> GatewayResult<()> {
        non_blank(self.description.as_deref(), "description")
    }
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
