//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! private to this module. Connections come from a `bb8` pool through
//! `diesel-async`; the schema is created by embedded migrations.
//!
//! # Example
//!
//! ```no_run
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use trivia::outbound::persistence::{
//!     DbPool, DieselQuestionRepository, PoolConfig, run_pending_migrations,
//! };
//!
//! let url = "postgres://trivia@localhost/trivia";
//! run_pending_migrations(url.to_owned()).await?;
//! let pool = DbPool::new(PoolConfig::new(url)).await?;
//! let questions = DieselQuestionRepository::new(pool);
//! # let _ = questions;
//! # Ok(())
//! # }
//! ```

mod diesel_basic_error_mapping;
mod diesel_category_repository;
mod diesel_question_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_category_repository::DieselCategoryRepository;
pub use diesel_question_repository::DieselQuestionRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DEFAULT_POOL_MAX_SIZE, DbPool, PoolConfig, PoolError};
