//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::quiz::RandomSource;
use crate::inbound::http::configure;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryTriviaStore;

/// Build an app exposing every trivia route over `state`.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .configure(configure)
}

/// State wired over an in-memory store with a fixed random seed.
pub fn memory_state(store: Arc<InMemoryTriviaStore>) -> HttpState {
    HttpState::from_repositories(Arc::clone(&store), store, Arc::new(RandomSource::seeded(7)))
}
