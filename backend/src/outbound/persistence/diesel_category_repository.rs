//! PostgreSQL-backed `CategoryRepository` implementation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::Category;
use crate::domain::ports::{CategoryRepository, CategoryRepositoryError};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::CategoryRow;
use super::pool::DbPool;
use super::schema::categories;

/// Diesel-backed implementation of the `CategoryRepository` port.
#[derive(Clone)]
pub struct DieselCategoryRepository {
    pool: DbPool,
}

impl DieselCategoryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for DieselCategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_basic_pool_error(err, CategoryRepositoryError::connection))?;
        let rows: Vec<CategoryRow> = categories::table
            .select(CategoryRow::as_select())
            .order(categories::id.asc())
            .load(&mut conn)
            .await
            .map_err(|err| {
                map_basic_diesel_error(
                    err,
                    CategoryRepositoryError::query,
                    CategoryRepositoryError::connection,
                )
            })?;
        Ok(rows.into_iter().map(Category::from).collect())
    }
}
