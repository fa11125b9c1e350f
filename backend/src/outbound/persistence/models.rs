//! Internal Diesel row structs.
//!
//! These never leave the persistence layer; repositories convert them into
//! validated domain values.

use diesel::prelude::*;

use super::schema::{categories, questions};

/// Row read from `categories`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CategoryRow {
    pub id: i32,
    pub label: String,
}

/// Row read from `questions`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = questions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct QuestionRow {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// Insertable question; the id comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = questions)]
pub(crate) struct NewQuestionRow<'a> {
    pub question: &'a str,
    pub answer: &'a str,
    pub category: i32,
    pub difficulty: i32,
}
