//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`QuestionRepository`, `CategoryRepository`) describe the
//! record store; driving ports (`TriviaQuery`, `TriviaCommand`, `QuizQuery`)
//! are what inbound adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod category_repository;
mod question_repository;
mod quiz_query;
mod trivia_command;
mod trivia_query;

#[cfg(test)]
pub use category_repository::MockCategoryRepository;
pub use category_repository::{
    CategoryRepository, CategoryRepositoryError, FixtureCategoryRepository,
};
#[cfg(test)]
pub use question_repository::MockQuestionRepository;
pub use question_repository::{
    FixtureQuestionRepository, QuestionRepository, QuestionRepositoryError,
};
#[cfg(test)]
pub use quiz_query::MockQuizQuery;
pub use quiz_query::{FixtureQuizQuery, NextQuestionRequest, QuizQuery};
#[cfg(test)]
pub use trivia_command::MockTriviaCommand;
pub use trivia_command::{FixtureTriviaCommand, TriviaCommand};
#[cfg(test)]
pub use trivia_query::MockTriviaQuery;
pub use trivia_query::{
    CategoryQuestionsRequest, FixtureTriviaQuery, ListQuestionsRequest, SearchQuestionsRequest,
    TriviaQuery,
};
