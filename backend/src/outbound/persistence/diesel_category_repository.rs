//! PostgreSQL-backed [`CategoryRepository`] using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::Category;
use crate::domain::ports::{CategoryRepository, CategoryStoreError};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::CategoryRow;
use super::pool::{DbPool, PoolError};
use super::schema::categories;

/// Diesel adapter for the category store port.
#[derive(Clone)]
pub struct DieselCategoryRepository {
    pool: DbPool,
}

impl DieselCategoryRepository {
    /// Create a repository over the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> CategoryStoreError {
    map_pool_error(error, CategoryStoreError::connection)
}

fn diesel_error(error: diesel::result::Error) -> CategoryStoreError {
    map_diesel_error(
        error,
        CategoryStoreError::query,
        CategoryStoreError::connection,
    )
}

#[async_trait]
impl CategoryRepository for DieselCategoryRepository {
    async fn list_ordered(&self) -> Result<Vec<Category>, CategoryStoreError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows: Vec<CategoryRow> = categories::table
            .order(categories::id.asc())
            .select(CategoryRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(rows.into_iter().map(Category::from).collect())
    }
}
