//! Validating edge for the ShareIt server.
//!
//! Every request is checked for a well-formed acting user, positive
//! identifiers, known filter values and complete bodies. Requests that pass
//! are forwarded to the server unchanged and its reply is relayed verbatim.

pub mod client;
pub mod config;
pub mod error;
pub mod routes;
pub mod sharer;
pub mod state;
mod validation;

pub use client::ServerClient;
pub use config::GatewaySettings;
pub use error::{GatewayError, GatewayResult};
pub use routes::configure;
pub use state::GatewayState;
