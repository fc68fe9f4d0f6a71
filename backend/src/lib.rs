//! Hostel management backend library.
//!
//! Hexagonal layout: [`domain`] owns entities, services and ports;
//! [`inbound`] adapts HTTP and WebSocket traffic onto the driving ports;
//! [`outbound`] implements the driven ports over SQLite and credential
//! libraries.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(feature = "test-support")]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
