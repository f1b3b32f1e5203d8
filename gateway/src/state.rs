//! Shared handler state.

use std::sync::Arc;

use chrono::NaiveDateTime;
use mockable::Clock;

use crate::client::ServerClient;

/// Forwarding client plus the clock booking windows are checked against.
#[derive(Clone)]
pub struct GatewayState {
    /// Client forwarding validated requests.
    pub client: ServerClient,
    clock: Arc<dyn Clock>,
}

impl GatewayState {
    /// Bundle `client` with `clock`.
    pub fn new(client: ServerClient, clock: Arc<dyn Clock>) -> Self {
        Self { client, clock }
    }

    /// Current UTC instant without a zone, matching the wire format.
    #[must_use]
    pub fn now(&self) -> NaiveDateTime {
        self.clock.utc().naive_utc()
    }
}
