//! Shared helpers for the HTTP integration tests.

#![allow(dead_code, reason = "each test binary uses a subset of the helpers")]

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use trivia::Trace;
use trivia::domain::ports::QuestionRepository;
use trivia::domain::quiz::RandomSource;
use trivia::domain::{CategoryId, Difficulty, NewQuestion, Question};
use trivia::inbound::http::configure;
use trivia::inbound::http::state::HttpState;
use trivia::middleware::cors_headers;
use trivia::outbound::memory::InMemoryTriviaStore;

/// Build the full trivia app over `store`, middleware included.
pub fn trivia_app(
    store: Arc<InMemoryTriviaStore>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::from_repositories(
        Arc::clone(&store),
        store,
        Arc::new(RandomSource::seeded(2024)),
    );
    App::new()
        .app_data(web::Data::new(state))
        .wrap(cors_headers())
        .wrap(Trace)
        .configure(configure)
}

/// Insert a question directly through the repository port.
pub async fn add_question(
    store: &InMemoryTriviaStore,
    text: &str,
    category: i64,
    difficulty: i64,
) -> Question {
    let draft = NewQuestion::new(
        text,
        format!("answer to {text}"),
        CategoryId::new(category).expect("valid category"),
        Difficulty::new(difficulty).expect("valid difficulty"),
    )
    .expect("valid question");
    store.insert_question(&draft).await.expect("insert question")
}

/// Store seeded with the default categories plus `count` questions for each
/// `(category, count)` entry.
pub async fn seeded_store(layout: &[(i64, usize)]) -> Arc<InMemoryTriviaStore> {
    let store = Arc::new(InMemoryTriviaStore::with_default_categories());
    for (category, count) in layout {
        for n in 1..=*count {
            add_question(
                &store,
                &format!("Category {category} question {n}?"),
                *category,
                1,
            )
            .await;
        }
    }
    store
}
