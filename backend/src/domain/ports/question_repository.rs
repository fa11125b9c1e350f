//! Driven port for question persistence.
//!
//! The question half of the record store: ordered reads, case-insensitive
//! substring lookup, creation with a store-assigned id, and deletion. No
//! update operation exists.

use async_trait::async_trait;

use crate::domain::{CategoryId, NewQuestion, Question, QuestionId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by question repository adapters.
    pub enum QuestionRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "question repository connection failed: {message}",
        /// Query or mutation failed during execution or row conversion.
        Query { message: String } =>
            "question repository query failed: {message}",
        /// The referenced category does not exist.
        UnknownCategory { category_id: i32 } =>
            "category {category_id} does not exist",
    }
}

/// Port for reading and mutating stored questions.
///
/// Every sequence is ordered by ascending question id so pagination windows
/// stay stable between requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Every stored question.
    async fn list_questions(&self) -> Result<Vec<Question>, QuestionRepositoryError>;

    /// One question by id.
    async fn find_question(
        &self,
        id: QuestionId,
    ) -> Result<Option<Question>, QuestionRepositoryError>;

    /// Questions belonging to `category_id`.
    async fn questions_by_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<Question>, QuestionRepositoryError>;

    /// Questions whose text contains `term`, ignoring case.
    ///
    /// `term` is matched literally; `%` and `_` carry no wildcard meaning.
    async fn questions_matching(
        &self,
        term: &str,
    ) -> Result<Vec<Question>, QuestionRepositoryError>;

    /// Store a new question and return it with its assigned id.
    ///
    /// Fails with [`QuestionRepositoryError::UnknownCategory`] when the
    /// category does not exist.
    async fn insert_question(
        &self,
        question: &NewQuestion,
    ) -> Result<Question, QuestionRepositoryError>;

    /// Delete a question, returning whether a row was removed.
    async fn delete_question(&self, id: QuestionId) -> Result<bool, QuestionRepositoryError>;
}

/// Fixture implementation for tests that do not exercise question storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureQuestionRepository;

#[async_trait]
impl QuestionRepository for FixtureQuestionRepository {
    async fn list_questions(&self) -> Result<Vec<Question>, QuestionRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_question(
        &self,
        _id: QuestionId,
    ) -> Result<Option<Question>, QuestionRepositoryError> {
        Ok(None)
    }

    async fn questions_by_category(
        &self,
        _category_id: CategoryId,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        Ok(Vec::new())
    }

    async fn questions_matching(
        &self,
        _term: &str,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        Ok(Vec::new())
    }

    async fn insert_question(
        &self,
        question: &NewQuestion,
    ) -> Result<Question, QuestionRepositoryError> {
        let id = QuestionId::new(1).map_err(|err| QuestionRepositoryError::query(err.to_string()))?;
        Ok(question.clone().with_id(id))
    }

    async fn delete_question(&self, _id: QuestionId) -> Result<bool, QuestionRepositoryError> {
        Ok(false)
    }
}
