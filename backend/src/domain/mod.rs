//! Domain primitives, pure query functions and services.
//!
//! Purpose: define strongly typed trivia entities and the logic that pages,
//! filters and draws from them, independent of HTTP and storage. Services
//! implement the driving ports in [`ports`] on top of the driven ports.
//!
//! Public surface:
//! - `Question`, `NewQuestion`, `Category`, `CategoryMap` and their ids.
//! - `Error` / `ErrorCode`: transport-agnostic failure payload.
//! - [`question_query`]: listing, search and category browsing.
//! - [`quiz`]: exclusion-aware random selection.
//! - `TriviaQueryService`, `TriviaCommandService`, `QuizService`.

pub mod category;
pub mod error;
pub mod ports;
pub mod question;
pub mod question_query;
pub mod quiz;
mod quiz_service;
#[cfg(test)]
mod test_fixtures;
pub mod trace_id;
mod trivia_service;

pub use self::category::{
    Category, CategoryId, CategoryMap, CategoryValidationError, DEFAULT_CATEGORY_LABELS,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::question::{
    DIFFICULTY_MAX, DIFFICULTY_MIN, Difficulty, NewQuestion, Question, QuestionDraft, QuestionId,
    QuestionValidationError,
};
pub use self::quiz_service::QuizService;
pub use self::trace_id::TraceId;
pub use self::trivia_service::{TriviaCommandService, TriviaQueryService};

/// Convenient result alias for fallible domain operations.
///
/// # Examples
/// ```
/// use trivia::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<u32> {
///     Err(Error::not_found("question 3 not found"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
