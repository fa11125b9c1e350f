//! Trivia backend library.
//!
//! Hexagonal layout: [`domain`] holds the entities, pure query functions and
//! services; [`inbound::http`] exposes them over Actix; [`outbound`] provides
//! the PostgreSQL and in-memory stores.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
