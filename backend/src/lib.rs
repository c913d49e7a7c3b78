//! Recipe catalog backend library.
//!
//! Layered hexagonally: `domain` holds entities, ports, and services;
//! `inbound` adapts HTTP onto the driving ports; `outbound` implements the
//! driven ports over PostgreSQL and bcrypt; `server` wires it all together.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

pub use doc::ApiDoc;
pub use middleware::Trace;
