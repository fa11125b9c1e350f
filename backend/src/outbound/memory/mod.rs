//! In-process record store.
//!
//! [`InMemoryTriviaStore`] implements both driven ports over ordered maps.
//! It backs the server when no database URL is configured and gives handler
//! and integration tests a real store without PostgreSQL.

mod store;

pub use store::InMemoryTriviaStore;
