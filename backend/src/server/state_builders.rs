//! Builders wiring the configured store into HTTP state.

use std::sync::Arc;

use trivia::domain::quiz::RandomSource;
use trivia::inbound::http::state::HttpState;
use trivia::outbound::persistence::{DieselCategoryRepository, DieselQuestionRepository};

use super::config::StoreBackend;

/// Build handler state over the configured store with an entropy-seeded
/// random source for quiz draws.
pub(crate) fn build_http_state(store: &StoreBackend) -> HttpState {
    let random = Arc::new(RandomSource::from_entropy());
    match store {
        StoreBackend::Postgres(pool) => HttpState::from_repositories(
            Arc::new(DieselQuestionRepository::new(pool.clone())),
            Arc::new(DieselCategoryRepository::new(pool.clone())),
            random,
        ),
        StoreBackend::Memory(store) => {
            HttpState::from_repositories(Arc::clone(store), Arc::clone(store), random)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trivia::domain::ports::NextQuestionRequest;
    use trivia::domain::quiz::{QuizOutcome, QuizScope};
    use trivia::outbound::memory::InMemoryTriviaStore;

    #[tokio::test]
    async fn memory_backend_reads_the_shared_store() {
        let store = Arc::new(InMemoryTriviaStore::with_default_categories());
        let state = build_http_state(&StoreBackend::Memory(Arc::clone(&store)));

        let categories = state.trivia.list_categories().await.expect("categories");
        assert_eq!(categories.len(), 6);

        let outcome = state
            .quiz
            .next_question(NextQuestionRequest {
                scope: QuizScope::All,
                previous_questions: Default::default(),
            })
            .await
            .expect("quiz turn");
        assert_eq!(outcome, QuizOutcome::Exhausted);
    }
}
