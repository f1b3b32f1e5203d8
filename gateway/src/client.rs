//! Forwarding client for the ShareIt server.
//!
//! A validated request is replayed against the server with the same method,
//! path, query string, sharer header and body. The server's status, content
//! type, trace header and body come back to the caller untouched.

use std::time::Duration;

use actix_web::http::{Method, StatusCode, header};
use actix_web::{HttpRequest, HttpResponse, web::Bytes};
use tracing::debug;

use crate::error::GatewayResult;
use crate::sharer::SHARER_USER_ID_HEADER;

/// Header the server uses to report its per-request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

/// HTTP client bound to one server base URL.
#[derive(Debug, Clone)]
pub struct ServerClient {
    http: reqwest::Client,
    base_url: String,
}

impl ServerClient {
    /// Build a client for `base_url` with a per-request `timeout`.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`reqwest::Error`] when the TLS backend cannot
    /// be initialised.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        })
    }

    /// Base URL requests are forwarded to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replay `req` and its JSON `body` against the server.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::GatewayError::Upstream`] when the server cannot
    /// be reached or its reply cannot be read.
    pub async fn forward(&self, req: &HttpRequest, body: Option<Bytes>) -> GatewayResult<HttpResponse> {
        let target = req
            .uri()
            .path_and_query()
            .map_or_else(|| req.path(), |pq| pq.as_str());
        let url = format!("{}{target}", self.base_url);

        let mut upstream = self.http.request(upstream_method(req.method()), &url);
        if let Some(user) = req
            .headers()
            .get(SHARER_USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
        {
            upstream = upstream.header(SHARER_USER_ID_HEADER, user);
        }
        if let Some(bytes) = body {
            upstream = upstream
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(bytes.to_vec());
        }

        let reply = upstream.send().await?;
        let status =
            StatusCode::from_u16(reply.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
        let content_type = header_text(&reply, reqwest::header::CONTENT_TYPE.as_str());
        let trace_id = header_text(&reply, TRACE_ID_HEADER);
        let payload = reply.bytes().await?;
        debug!(method = %req.method(), path = target, status = status.as_u16(), "request forwarded");

        let mut response = HttpResponse::build(status);
        if let Some(value) = content_type {
            response.insert_header((header::CONTENT_TYPE, value));
        }
        if let Some(value) = trace_id {
            response.insert_header((TRACE_ID_HEADER, value));
        }
        Ok(response.body(payload.to_vec()))
    }
}

fn upstream_method(method: &Method) -> reqwest::Method {
    match *method {
        Method::POST => reqwest::Method::POST,
        Method::PATCH => reqwest::Method::PATCH,
        Method::PUT => reqwest::Method::PUT,
        Method::DELETE => reqwest::Method::DELETE,
        _ => reqwest::Method::GET,
    }
}

fn header_text(reply: &reqwest::Response, name: &str) -> Option<String> {
    reply
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}
