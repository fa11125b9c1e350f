//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use trivia::outbound::memory::InMemoryTriviaStore;
use trivia::outbound::persistence::DbPool;

/// Record store the handlers run against.
#[derive(Clone)]
pub enum StoreBackend {
    /// PostgreSQL through the Diesel adapters.
    Postgres(DbPool),
    /// Process-local store; contents are lost on restart.
    Memory(Arc<InMemoryTriviaStore>),
}

impl StoreBackend {
    /// Short name for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }
}

/// Configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) store: StoreBackend,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr, store: StoreBackend) -> Self {
        Self { bind_addr, store }
    }
}
