//! PostgreSQL-backed `CategoryRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CategoryRepository, CategoryRepositoryError};
use crate::domain::{Category, CategoryId};

use super::diesel_basic_error_mapping::{DieselFailure, classify_diesel_error};
use super::models::CategoryRow;
use super::pool::{DbPool, PoolError};
use super::schema::categories;

/// Diesel-backed implementation of the category repository port.
#[derive(Clone)]
pub struct DieselCategoryRepository {
    pool: DbPool,
}

impl DieselCategoryRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CategoryRepositoryError {
    CategoryRepositoryError::connection(error.message())
}

fn map_diesel_error(error: diesel::result::Error) -> CategoryRepositoryError {
    match classify_diesel_error(&error) {
        DieselFailure::Connection(message) => CategoryRepositoryError::connection(message),
        DieselFailure::ForeignKey => CategoryRepositoryError::query("database constraint error"),
        DieselFailure::Query(message) => CategoryRepositoryError::query(message),
    }
}

fn row_to_category(row: CategoryRow) -> Result<Category, CategoryRepositoryError> {
    let id = CategoryId::new(i64::from(row.id))
        .map_err(|err| CategoryRepositoryError::query(err.to_string()))?;
    Category::new(id, row.label).map_err(|err| CategoryRepositoryError::query(err.to_string()))
}

#[async_trait]
impl CategoryRepository for DieselCategoryRepository {
    async fn list_categories(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CategoryRow> = categories::table
            .order(categories::id.asc())
            .select(CategoryRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_category).collect()
    }

    async fn find_category(
        &self,
        id: CategoryId,
    ) -> Result<Option<Category>, CategoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = categories::table
            .filter(categories::id.eq(id.get()))
            .select(CategoryRow::as_select())
            .first::<CategoryRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_category).transpose()
    }
}
