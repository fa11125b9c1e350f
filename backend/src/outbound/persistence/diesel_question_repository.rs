//! PostgreSQL-backed `QuestionRepository` implementation using Diesel ORM.
//!
//! Every read is ordered by id. Substring search uses `ILIKE` with the
//! term's wildcard characters escaped, so `%` and `_` match literally.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{QuestionRepository, QuestionRepositoryError};
use crate::domain::{
    CategoryId, Difficulty, NewQuestion, Question, QuestionDraft, QuestionId,
};

use super::diesel_basic_error_mapping::{DieselFailure, classify_diesel_error};
use super::models::{NewQuestionRow, QuestionRow};
use super::pool::{DbPool, PoolError};
use super::schema::questions;

/// Diesel-backed implementation of the question repository port.
#[derive(Clone)]
pub struct DieselQuestionRepository {
    pool: DbPool,
}

impl DieselQuestionRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> QuestionRepositoryError {
    QuestionRepositoryError::connection(error.message())
}

fn map_diesel_error(error: diesel::result::Error) -> QuestionRepositoryError {
    match classify_diesel_error(&error) {
        DieselFailure::Connection(message) => QuestionRepositoryError::connection(message),
        DieselFailure::ForeignKey => QuestionRepositoryError::query("database constraint error"),
        DieselFailure::Query(message) => QuestionRepositoryError::query(message),
    }
}

/// `ILIKE` pattern matching `term` anywhere, with `\`, `%` and `_` escaped.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

fn row_to_question(row: QuestionRow) -> Result<Question, QuestionRepositoryError> {
    let QuestionRow {
        id,
        question,
        answer,
        category,
        difficulty,
    } = row;
    let invalid = |err: &dyn std::fmt::Display| QuestionRepositoryError::query(err.to_string());

    Question::new(QuestionDraft {
        id: QuestionId::new(i64::from(id)).map_err(|err| invalid(&err))?,
        question,
        answer,
        category: CategoryId::new(i64::from(category)).map_err(|err| invalid(&err))?,
        difficulty: Difficulty::new(i64::from(difficulty)).map_err(|err| invalid(&err))?,
    })
    .map_err(|err| invalid(&err))
}

fn rows_to_questions(rows: Vec<QuestionRow>) -> Result<Vec<Question>, QuestionRepositoryError> {
    rows.into_iter().map(row_to_question).collect()
}

#[async_trait]
impl QuestionRepository for DieselQuestionRepository {
    async fn list_questions(&self) -> Result<Vec<Question>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows = questions::table
            .order(questions::id.asc())
            .select(QuestionRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows_to_questions(rows)
    }

    async fn find_question(
        &self,
        id: QuestionId,
    ) -> Result<Option<Question>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = questions::table
            .filter(questions::id.eq(id.get()))
            .select(QuestionRow::as_select())
            .first::<QuestionRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_question).transpose()
    }

    async fn questions_by_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows = questions::table
            .filter(questions::category.eq(category_id.get()))
            .order(questions::id.asc())
            .select(QuestionRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows_to_questions(rows)
    }

    async fn questions_matching(
        &self,
        term: &str,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows = questions::table
            .filter(questions::question.ilike(contains_pattern(term)))
            .order(questions::id.asc())
            .select(QuestionRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows_to_questions(rows)
    }

    async fn insert_question(
        &self,
        question: &NewQuestion,
    ) -> Result<Question, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let category = question.category();

        let new_row = NewQuestionRow {
            question: question.question(),
            answer: question.answer(),
            category: category.get(),
            difficulty: i32::from(question.difficulty().get()),
        };

        let row = diesel::insert_into(questions::table)
            .values(&new_row)
            .returning(QuestionRow::as_returning())
            .get_result::<QuestionRow>(&mut conn)
            .await
            .map_err(|err| match classify_diesel_error(&err) {
                DieselFailure::ForeignKey => {
                    QuestionRepositoryError::unknown_category(category.get())
                }
                _ => map_diesel_error(err),
            })?;

        row_to_question(row)
    }

    async fn delete_question(&self, id: QuestionId) -> Result<bool, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(questions::table.filter(questions::id.eq(id.get())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}
