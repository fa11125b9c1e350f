//! Backend entry-point: loads settings, prepares the store and serves the
//! trivia REST API.

mod server;

use std::io;
use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, StoreBackend, create_server};
use trivia::inbound::http::health::HealthState;
use trivia::outbound::memory::InMemoryTriviaStore;
use trivia::outbound::persistence::{DbPool, run_pending_migrations};
use trivia::settings::TriviaSettings;

/// In-memory store, seeded with the default categories unless disabled.
fn memory_store(settings: &TriviaSettings) -> InMemoryTriviaStore {
    let store = InMemoryTriviaStore::new();
    if settings.seed_categories() {
        let seeded = store.seed_default_categories();
        info!(seeded, "seeded in-memory store with default categories");
    }
    store
}

/// Prepare the configured store: migrate PostgreSQL, or seed the in-memory
/// store with the default categories.
async fn prepare_store(settings: &TriviaSettings) -> io::Result<StoreBackend> {
    let Some(pool_config) = settings.pool_config() else {
        warn!("no database URL configured; questions will not survive a restart");
        return Ok(StoreBackend::Memory(Arc::new(memory_store(settings))));
    };

    run_pending_migrations(pool_config.database_url().to_owned())
        .await
        .map_err(|err| io::Error::other(format!("database migration failed: {err}")))?;
    let pool = DbPool::new(pool_config)
        .await
        .map_err(|err| io::Error::other(format!("database pool setup failed: {err}")))?;
    Ok(StoreBackend::Postgres(pool))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = TriviaSettings::load()
        .map_err(|err| io::Error::other(format!("failed to load settings: {err}")))?;
    let bind_addr = settings.bind_addr().map_err(io::Error::other)?;
    let store = prepare_store(&settings).await?;

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, ServerConfig::new(bind_addr, store))?.await
}
