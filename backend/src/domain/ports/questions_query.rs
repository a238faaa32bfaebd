//! Driving ports for reading questions and categories.
//!
//! Inbound adapters use these ports to render the listing, search and
//! category endpoints without touching persistence.

use async_trait::async_trait;

use crate::domain::{CategoryId, CategoryMap, Error, Question};

/// One page of the full question listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPage {
    /// Questions inside the requested window.
    pub questions: Vec<Question>,
    /// Count of every stored question, not just the window.
    pub total_questions: usize,
    /// Every category, keyed by id.
    pub categories: CategoryMap,
}

/// A filtered, unpaginated set of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionList {
    pub questions: Vec<Question>,
    /// Count of matching questions.
    pub total_questions: usize,
}

impl From<Vec<Question>> for QuestionList {
    fn from(questions: Vec<Question>) -> Self {
        Self {
            total_questions: questions.len(),
            questions,
        }
    }
}

/// Use-case port for category listing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoriesQuery: Send + Sync {
    /// Return the label of every category keyed by id.
    async fn list_categories(&self) -> Result<CategoryMap, Error>;
}

/// Use-case port for question listing, search and category filtering.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionsQuery: Send + Sync {
    /// Return page `page` (1-based) of all questions.
    ///
    /// An empty window, including any `page < 1`, is
    /// [`crate::domain::ErrorCode::NotFound`].
    async fn list_questions(&self, page: i64) -> Result<QuestionPage, Error>;

    /// Return questions whose text contains `term`, ignoring case.
    ///
    /// No match is [`crate::domain::ErrorCode::NotFound`].
    async fn search_questions(&self, term: &str) -> Result<QuestionList, Error>;

    /// Return every question in `category`.
    ///
    /// No match yields the error code selected by the service's
    /// [`crate::domain::EmptyCategoryPolicy`].
    async fn questions_by_category(&self, category: CategoryId) -> Result<QuestionList, Error>;
}
