//! Driving port for quiz play.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::domain::quiz::{QuizOutcome, QuizScope};
use crate::domain::{Error, QuestionId};

/// One quiz turn: the scope plus every id the session has already seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextQuestionRequest {
    pub scope: QuizScope,
    pub previous_questions: HashSet<QuestionId>,
}

/// Driving port selecting the next quiz question.
///
/// # Examples
///
/// ```rust,no_run
/// # async fn example() -> Result<(), trivia::domain::Error> {
/// use trivia::domain::ports::{FixtureQuizQuery, NextQuestionRequest, QuizQuery};
/// use trivia::domain::quiz::{QuizOutcome, QuizScope};
///
/// let outcome = FixtureQuizQuery
///     .next_question(NextQuestionRequest {
///         scope: QuizScope::All,
///         previous_questions: Default::default(),
///     })
///     .await?;
/// assert_eq!(outcome, QuizOutcome::Exhausted);
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizQuery: Send + Sync {
    /// Draw a question in scope that the session has not seen yet.
    async fn next_question(&self, request: NextQuestionRequest) -> Result<QuizOutcome, Error>;
}

/// Fixture quiz implementation whose pool is always exhausted.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureQuizQuery;

#[async_trait]
impl QuizQuery for FixtureQuizQuery {
    async fn next_question(&self, _request: NextQuestionRequest) -> Result<QuizOutcome, Error> {
        Ok(QuizOutcome::Exhausted)
    }
}
