//! PostgreSQL-backed `QuestionRepository` implementation using Diesel ORM.
//!
//! Inserts are a single statement. Deletes lock the row, then remove it,
//! inside one transaction so a failure leaves the record in place.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::ports::{QuestionRepository, QuestionRepositoryError};
use crate::domain::{CategoryId, NewQuestion, Question, QuestionId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewQuestionRow, QuestionRow};
use super::pool::{DbPool, PoolError};
use super::schema::questions;

/// Diesel-backed implementation of the `QuestionRepository` port.
#[derive(Clone)]
pub struct DieselQuestionRepository {
    pool: DbPool,
}

impl DieselQuestionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> QuestionRepositoryError {
    map_basic_pool_error(error, QuestionRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> QuestionRepositoryError {
    map_basic_diesel_error(
        error,
        QuestionRepositoryError::query,
        QuestionRepositoryError::connection,
    )
}

/// Build a case-insensitive substring pattern with LIKE wildcards escaped.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

fn into_questions(rows: Vec<QuestionRow>) -> Vec<Question> {
    rows.into_iter().map(Question::from).collect()
}

#[async_trait]
impl QuestionRepository for DieselQuestionRepository {
    async fn find_all(&self) -> Result<Vec<Question>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<QuestionRow> = questions::table
            .select(QuestionRow::as_select())
            .order(questions::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(into_questions(rows))
    }

    async fn find_by_id(
        &self,
        id: QuestionId,
    ) -> Result<Option<Question>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<QuestionRow> = questions::table
            .find(id.get())
            .select(QuestionRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Question::from))
    }

    async fn find_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<QuestionRow> = questions::table
            .filter(questions::category.eq(category.get()))
            .select(QuestionRow::as_select())
            .order(questions::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(into_questions(rows))
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<QuestionRow> = questions::table
            .filter(questions::question.ilike(contains_pattern(term)))
            .select(QuestionRow::as_select())
            .order(questions::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(into_questions(rows))
    }

    async fn find_candidates(
        &self,
        excluded: &[QuestionId],
        category: Option<CategoryId>,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        let excluded_ids: Vec<i32> = excluded.iter().map(|id| id.get()).collect();
        let mut query = questions::table
            .filter(questions::id.ne_all(excluded_ids))
            .select(QuestionRow::as_select())
            .order(questions::id.asc())
            .into_boxed();
        if let Some(category) = category {
            query = query.filter(questions::category.eq(category.get()));
        }

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<QuestionRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;
        Ok(into_questions(rows))
    }

    async fn insert(&self, question: &NewQuestion) -> Result<QuestionId, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let id: i32 = diesel::insert_into(questions::table)
            .values(NewQuestionRow::from(question))
            .returning(questions::id)
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(QuestionId::new(id))
    }

    async fn delete(&self, id: QuestionId) -> Result<bool, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        conn.transaction(|conn| {
            async move {
                let existing: Option<i32> = questions::table
                    .find(id.get())
                    .select(questions::id)
                    .for_update()
                    .first(conn)
                    .await
                    .optional()?;
                if existing.is_none() {
                    return Ok(false);
                }
                diesel::delete(questions::table.find(id.get()))
                    .execute(conn)
                    .await?;
                Ok(true)
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }
}
