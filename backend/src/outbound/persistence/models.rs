//! Row types bridging the Diesel schema and the domain model.

use diesel::prelude::*;

use crate::domain::{Category, Question};

use super::schema::{categories, questions};

/// A question row as stored in PostgreSQL.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = questions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct QuestionRow {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: String,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Self {
            id: row.id,
            question: row.question,
            answer: row.answer,
            difficulty: row.difficulty,
            category: row.category,
        }
    }
}

/// Insert payload for a new question; the id comes from the database.
#[derive(Debug, Insertable)]
#[diesel(table_name = questions)]
pub struct NewQuestionRow<'a> {
    pub question: &'a str,
    pub answer: &'a str,
    pub difficulty: i32,
    pub category: &'a str,
}

/// A category row as stored in PostgreSQL.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CategoryRow {
    pub id: i32,
    pub kind: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            kind: row.kind,
        }
    }
}
