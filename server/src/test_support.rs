//! Test utilities for the server crate.
//!
//! Compiled for unit tests and, through the `test-support` feature, for the
//! integration suites under `tests/`. Nothing here touches a database.

mod clock;
mod in_memory;

pub use clock::MutableClock;
pub use in_memory::{InMemoryStore, in_memory_http_state};
