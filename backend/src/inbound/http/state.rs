//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CategoryRepository, FixtureQuizQuery, FixtureTriviaCommand, FixtureTriviaQuery,
    QuestionRepository, QuizQuery, TriviaCommand, TriviaQuery,
};
use crate::domain::quiz::RandomSource;
use crate::domain::{QuizService, TriviaCommandService, TriviaQueryService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub trivia: Arc<dyn TriviaQuery>,
    pub trivia_command: Arc<dyn TriviaCommand>,
    pub quiz: Arc<dyn QuizQuery>,
}

impl HttpState {
    /// Construct state from the three driving ports.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use trivia::domain::ports::{FixtureQuizQuery, FixtureTriviaCommand, FixtureTriviaQuery};
    /// use trivia::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(FixtureTriviaQuery),
    ///     Arc::new(FixtureTriviaCommand),
    ///     Arc::new(FixtureQuizQuery),
    /// );
    /// let _quiz = state.quiz.clone();
    /// ```
    pub fn new(
        trivia: Arc<dyn TriviaQuery>,
        trivia_command: Arc<dyn TriviaCommand>,
        quiz: Arc<dyn QuizQuery>,
    ) -> Self {
        Self {
            trivia,
            trivia_command,
            quiz,
        }
    }

    /// Wire the domain services over a pair of repositories.
    ///
    /// Both adapters usually share one store, so callers pass the same `Arc`
    /// twice when a single type implements both ports.
    pub fn from_repositories<Q, C>(
        questions: Arc<Q>,
        categories: Arc<C>,
        random: Arc<RandomSource>,
    ) -> Self
    where
        Q: QuestionRepository + 'static,
        C: CategoryRepository + 'static,
    {
        Self::new(
            Arc::new(TriviaQueryService::new(
                Arc::clone(&questions),
                categories,
            )),
            Arc::new(TriviaCommandService::new(Arc::clone(&questions))),
            Arc::new(QuizService::new(questions, random)),
        )
    }

    /// State backed entirely by fixture ports.
    pub fn fixture() -> Self {
        Self::new(
            Arc::new(FixtureTriviaQuery),
            Arc::new(FixtureTriviaCommand),
            Arc::new(FixtureQuizQuery),
        )
    }

    /// Replace the read port.
    #[must_use]
    pub fn with_trivia(mut self, trivia: Arc<dyn TriviaQuery>) -> Self {
        self.trivia = trivia;
        self
    }

    /// Replace the mutation port.
    #[must_use]
    pub fn with_trivia_command(mut self, trivia_command: Arc<dyn TriviaCommand>) -> Self {
        self.trivia_command = trivia_command;
        self
    }

    /// Replace the quiz port.
    #[must_use]
    pub fn with_quiz(mut self, quiz: Arc<dyn QuizQuery>) -> Self {
        self.quiz = quiz;
        self
    }
}
