//! Item-sharing server library.
//!
//! The crate follows a hexagonal layout: [`domain`] holds entities, ports and
//! services; [`inbound`] adapts HTTP requests onto the driving ports and
//! [`outbound`] implements the driven ports over PostgreSQL.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
