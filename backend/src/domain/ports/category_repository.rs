//! Driven port for category reads.
//!
//! Categories are read-only: the store is seeded with them and this port
//! only lists and looks them up.

use async_trait::async_trait;

use crate::domain::{Category, CategoryId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by category repository adapters.
    pub enum CategoryRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "category repository connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "category repository query failed: {message}",
    }
}

/// Port for reading categories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Every category ordered by id.
    async fn list_categories(&self) -> Result<Vec<Category>, CategoryRepositoryError>;

    /// One category by id.
    async fn find_category(
        &self,
        id: CategoryId,
    ) -> Result<Option<Category>, CategoryRepositoryError>;
}

/// Fixture implementation for tests that do not exercise category reads.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCategoryRepository;

#[async_trait]
impl CategoryRepository for FixtureCategoryRepository {
    async fn list_categories(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_category(
        &self,
        _id: CategoryId,
    ) -> Result<Option<Category>, CategoryRepositoryError> {
        Ok(None)
    }
}
