//! Request middleware.
//!
//! Purpose: request lifecycle concerns shared by every route, namely trace
//! correlation and the CORS allow headers.

pub mod cors;
pub mod trace;

pub use cors::cors_headers;
pub use trace::Trace;
