//! Driving port for quiz play.

use async_trait::async_trait;

use crate::domain::{Error, QuizRound, QuizRoundRequest};

/// Use-case port drawing the next unseen quiz question.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizQuery: Send + Sync {
    /// Draw one question uniformly at random from the candidate pool.
    ///
    /// An empty pool is [`QuizRound::Exhausted`], not an error. Storage
    /// failures are [`crate::domain::ErrorCode::Unprocessable`].
    async fn next_question(&self, request: QuizRoundRequest) -> Result<QuizRound, Error>;
}
