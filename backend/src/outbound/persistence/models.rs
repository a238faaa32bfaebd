//! Internal Diesel row structs.
//!
//! Never exposed to the domain; repositories convert to and from domain
//! records at the adapter boundary.

use diesel::prelude::*;

use crate::domain::{Category, CategoryId, NewQuestion, Question, QuestionId};

use super::schema::{categories, questions};

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

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Self {
            id: QuestionId::new(row.id),
            question: row.question,
            answer: row.answer,
            category: CategoryId::new(row.category),
            difficulty: row.difficulty,
        }
    }
}

/// Insertable row for `questions`; the database assigns `id`.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = questions)]
pub(crate) struct NewQuestionRow<'a> {
    pub question: &'a str,
    pub answer: &'a str,
    pub category: i32,
    pub difficulty: i32,
}

impl<'a> From<&'a NewQuestion> for NewQuestionRow<'a> {
    fn from(question: &'a NewQuestion) -> Self {
        Self {
            question: &question.question,
            answer: &question.answer,
            category: question.category.get(),
            difficulty: question.difficulty,
        }
    }
}

/// Row read from `categories`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CategoryRow {
    pub id: i32,
    pub kind: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: CategoryId::new(row.id),
            kind: row.kind,
        }
    }
}
