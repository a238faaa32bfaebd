//! Driving port for question mutations.

use async_trait::async_trait;

use crate::domain::{Error, QuestionDraft, QuestionId};

/// Use-case port for creating and deleting questions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionsCommand: Send + Sync {
    /// Persist a new question built from `draft`.
    ///
    /// A missing field or a storage failure is
    /// [`crate::domain::ErrorCode::Unprocessable`]. Only an acknowledgment is
    /// returned; the assigned id is not exposed.
    async fn add_question(&self, draft: QuestionDraft) -> Result<(), Error>;

    /// Permanently remove a question.
    ///
    /// An unknown id and a storage failure are both
    /// [`crate::domain::ErrorCode::NotFound`].
    async fn delete_question(&self, id: QuestionId) -> Result<(), Error>;
}
