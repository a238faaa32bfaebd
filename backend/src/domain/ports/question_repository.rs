//! Port for question persistence.
//!
//! Adapters store questions and answer the filtered queries the trivia
//! service needs. Mutating calls must be atomic: a failed insert or delete
//! leaves no partial change behind.

use async_trait::async_trait;

use crate::domain::{CategoryId, NewQuestion, Question, QuestionId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by question repository adapters.
    pub enum QuestionRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "question repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "question repository query failed: {message}",
    }
}

/// Driven port for question storage and lookup.
///
/// Listing methods return questions in a stable order (ascending id for the
/// bundled adapters); callers must not rely on any other ordering.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Fetch every stored question.
    async fn find_all(&self) -> Result<Vec<Question>, QuestionRepositoryError>;

    /// Fetch one question by id. Returns `None` when absent.
    ///
    /// The service checks existence with this before asking for a delete.
    async fn find_by_id(&self, id: QuestionId)
    -> Result<Option<Question>, QuestionRepositoryError>;

    /// Fetch questions whose category equals `category`.
    async fn find_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, QuestionRepositoryError>;

    /// Fetch questions whose text contains `term`, ignoring case.
    ///
    /// Only the question text is matched, never the answer.
    async fn search(&self, term: &str) -> Result<Vec<Question>, QuestionRepositoryError>;

    /// Fetch questions not listed in `excluded`, optionally restricted to one
    /// category.
    async fn find_candidates(
        &self,
        excluded: &[QuestionId],
        category: Option<CategoryId>,
    ) -> Result<Vec<Question>, QuestionRepositoryError>;

    /// Insert a question and return the identifier assigned to it.
    async fn insert(&self, question: &NewQuestion) -> Result<QuestionId, QuestionRepositoryError>;

    /// Delete a question.
    ///
    /// Returns `Ok(true)` when a record was removed and `Ok(false)` when no
    /// record had that id. Lookup and removal happen as one atomic unit.
    async fn delete(&self, id: QuestionId) -> Result<bool, QuestionRepositoryError>;
}
