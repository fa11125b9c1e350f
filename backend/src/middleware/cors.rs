//! Permissive CORS headers for the browser trivia client.
//!
//! The client is served from a different origin, so every response,
//! including error bodies, carries the allow headers below. Preflight
//! `OPTIONS` requests are answered by the default service.

use actix_web::http::header;
use actix_web::middleware::DefaultHeaders;

/// Headers the client may send.
pub const ALLOWED_HEADERS: &str = "Content-Type, Authorization";
/// Methods the client may use.
pub const ALLOWED_METHODS: &str = "GET, POST, PATCH, DELETE, OPTIONS";

/// Build the middleware appending the CORS allow headers.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use trivia::middleware::cors::cors_headers;
///
/// let _app = App::new().wrap(cors_headers());
/// ```
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .add((header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS))
        .add((header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS))
}
