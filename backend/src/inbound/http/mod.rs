//! HTTP inbound adapter exposing the trivia REST endpoints.
//!
//! [`configure`] registers every route together with the extractor error
//! handlers, so the server and the tests build identical apps.

pub mod categories;
pub mod error;
pub mod health;
pub mod index;
pub mod questions;
pub mod quizzes;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

use actix_web::http::Method;
use actix_web::{HttpRequest, HttpResponse, web};

pub use error::ApiResult;

use crate::domain::Error;

/// Answer preflight requests and report unknown routes as JSON 404s.
pub async fn fallback(req: HttpRequest) -> ApiResult<HttpResponse> {
    if req.method() == Method::OPTIONS {
        return Ok(HttpResponse::NoContent().finish());
    }
    Err(Error::not_found(format!(
        "no resource at {} {}",
        req.method(),
        req.path()
    )))
}

/// Register the trivia routes and extractor configuration.
///
/// Handlers expect a `web::Data<HttpState>` to be registered on the app.
///
/// # Examples
/// ```no_run
/// use actix_web::{App, web};
/// use trivia::inbound::http::configure;
/// use trivia::inbound::http::state::HttpState;
///
/// let _app = App::new()
///     .app_data(web::Data::new(HttpState::fixture()))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
        .service(index::index)
        .service(categories::list_categories)
        .service(categories::category_questions)
        .service(questions::list_questions)
        .service(questions::search_questions)
        .service(questions::create_question)
        .service(questions::delete_question)
        .service(quizzes::play_quiz)
        .default_service(web::to(fallback));
}
