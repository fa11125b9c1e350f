//! Driving port for trivia mutations.
//!
//! Questions are created and deleted; there is no update operation.

use async_trait::async_trait;

use crate::domain::{Error, NewQuestion, Question, QuestionId};

/// Driving port for question creation and deletion.
///
/// # Examples
///
/// ```rust,no_run
/// # async fn example() {
/// use trivia::domain::QuestionId;
/// use trivia::domain::ports::{FixtureTriviaCommand, TriviaCommand};
///
/// let id = QuestionId::new(4).expect("valid id");
/// let result = FixtureTriviaCommand.delete_question(id).await;
/// assert!(result.is_err());
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TriviaCommand: Send + Sync {
    /// Store a validated question and return it with its assigned id.
    async fn create_question(&self, question: NewQuestion) -> Result<Question, Error>;

    /// Delete a question, returning the id that was removed.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] when no question has
    /// the id.
    async fn delete_question(&self, id: QuestionId) -> Result<QuestionId, Error>;
}

/// Fixture command implementation for tests that do not need a store.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTriviaCommand;

#[async_trait]
impl TriviaCommand for FixtureTriviaCommand {
    async fn create_question(&self, question: NewQuestion) -> Result<Question, Error> {
        let id = QuestionId::new(1).map_err(|err| Error::internal(err.to_string()))?;
        Ok(question.with_id(id))
    }

    async fn delete_question(&self, id: QuestionId) -> Result<QuestionId, Error> {
        Err(Error::not_found(format!("question {id} not found")))
    }
}
