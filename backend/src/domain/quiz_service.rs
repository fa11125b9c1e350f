//! Quiz play service implementing the [`QuizQuery`] driving port.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{NextQuestionRequest, QuestionRepository, QuizQuery};
use crate::domain::quiz::{self, QuizOutcome, QuizScope, RandomSource};
use crate::domain::trivia_service::map_question_error;
use crate::domain::Error;

/// Quiz service drawing from the question repository.
///
/// A scope naming a category with no stored questions, or no category at
/// all, has an empty candidate set and reports [`QuizOutcome::Exhausted`].
#[derive(Clone)]
pub struct QuizService<Q> {
    questions: Arc<Q>,
    random: Arc<RandomSource>,
}

impl<Q> QuizService<Q> {
    /// Create a quiz service with an explicit random source.
    pub fn new(questions: Arc<Q>, random: Arc<RandomSource>) -> Self {
        Self { questions, random }
    }
}

#[async_trait]
impl<Q> QuizQuery for QuizService<Q>
where
    Q: QuestionRepository,
{
    async fn next_question(&self, request: NextQuestionRequest) -> Result<QuizOutcome, Error> {
        let NextQuestionRequest {
            scope,
            previous_questions,
        } = request;
        let pool = match scope {
            QuizScope::All => self.questions.list_questions().await,
            QuizScope::Category(id) => self.questions.questions_by_category(id).await,
        }
        .map_err(map_question_error)?;

        let outcome = self
            .random
            .with_rng(|rng| quiz::select_next(&pool, scope, &previous_questions, rng));
        match &outcome {
            QuizOutcome::Next {
                question,
                remaining,
            } => debug!(id = %question.id(), remaining, "quiz question drawn"),
            QuizOutcome::Exhausted => debug!(
                seen = previous_questions.len(),
                "quiz pool exhausted"
            ),
        }
        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "quiz_service_tests.rs"]
mod tests;
