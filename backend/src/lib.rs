//! Trivia quiz HTTP API.
//!
//! The crate is laid out as a hexagon: [`domain`] holds the records, ports
//! and service; [`inbound`] adapts HTTP requests onto the driving ports;
//! [`outbound`] implements the driven repository ports.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
