//! PostgreSQL-backed [`QuestionRepository`] using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::QuestionDraft;
use crate::domain::ports::{QuestionRepository, QuestionStoreError};
use crate::domain::Question;

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewQuestionRow, QuestionRow};
use super::pool::{DbPool, PoolError};
use super::schema::questions;

/// Diesel adapter for the question store port.
#[derive(Clone)]
pub struct DieselQuestionRepository {
    pool: DbPool,
}

impl DieselQuestionRepository {
    /// Create a repository over the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> QuestionStoreError {
    map_pool_error(error, QuestionStoreError::connection)
}

fn diesel_error(error: diesel::result::Error) -> QuestionStoreError {
    map_diesel_error(
        error,
        QuestionStoreError::query,
        QuestionStoreError::connection,
    )
}

#[async_trait]
impl QuestionRepository for DieselQuestionRepository {
    async fn insert(&self, draft: QuestionDraft) -> Result<Question, QuestionStoreError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let new_row = NewQuestionRow {
            question: draft.question(),
            answer: draft.answer(),
            difficulty: draft.difficulty(),
            category: draft.category(),
        };
        let row: QuestionRow = diesel::insert_into(questions::table)
            .values(&new_row)
            .returning(QuestionRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(row.into())
    }

    async fn delete(&self, id: i32) -> Result<(), QuestionStoreError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let deleted = diesel::delete(questions::table.filter(questions::id.eq(id)))
            .execute(&mut conn)
            .await
            .map_err(diesel_error)?;
        if deleted == 0 {
            return Err(QuestionStoreError::row_not_found(id));
        }
        Ok(())
    }

    async fn list_ordered(&self) -> Result<Vec<Question>, QuestionStoreError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows: Vec<QuestionRow> = questions::table
            .order(questions::id.asc())
            .select(QuestionRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, QuestionStoreError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let pattern = format!("%{}%", escape_like(term));
        let rows: Vec<QuestionRow> = questions::table
            .filter(questions::question.ilike(pattern))
            .order(questions::id.asc())
            .select(QuestionRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn list_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Question>, QuestionStoreError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows: Vec<QuestionRow> = questions::table
            .filter(questions::category.eq(category))
            .order(questions::id.asc())
            .select(QuestionRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn quiz_pool(
        &self,
        category: Option<&str>,
        excluded: &[i32],
    ) -> Result<Vec<Question>, QuestionStoreError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let mut query = questions::table
            .select(QuestionRow::as_select())
            .filter(questions::id.ne_all(excluded.to_vec()))
            .order(questions::id.asc())
            .into_boxed();
        if let Some(category) = category {
            query = query.filter(questions::category.eq(category.to_owned()));
        }
        let rows: Vec<QuestionRow> = query.load(&mut conn).await.map_err(diesel_error)?;
        Ok(rows.into_iter().map(Question::from).collect())
    }
}

/// Escape LIKE metacharacters so search terms match literally.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
