//! Quiz round selection types.

use super::{CategoryId, Question, QuestionId};

/// Category scope for a quiz round.
///
/// On the wire a quiz category id of `0` means "every category". Nothing
/// prevents a stored category from also using id `0`; such a category cannot
/// be selected on its own in a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    /// Draw from every question.
    All,
    /// Draw only from questions in this category.
    Only(CategoryId),
}

impl QuizCategory {
    /// Wire id reserved for "all categories".
    pub const ALL_CATEGORIES_ID: i32 = 0;

    /// Interpret a client-supplied category id.
    ///
    /// # Examples
    /// ```
    /// use trivia_api::domain::{CategoryId, QuizCategory};
    ///
    /// assert_eq!(QuizCategory::from_wire_id(0), QuizCategory::All);
    /// assert_eq!(
    ///     QuizCategory::from_wire_id(4),
    ///     QuizCategory::Only(CategoryId::new(4))
    /// );
    /// ```
    #[must_use]
    pub const fn from_wire_id(id: i32) -> Self {
        if id == Self::ALL_CATEGORIES_ID {
            Self::All
        } else {
            Self::Only(CategoryId::new(id))
        }
    }

    /// Category filter for the candidate query; `None` means unrestricted.
    #[must_use]
    pub const fn filter(self) -> Option<CategoryId> {
        match self {
            Self::All => None,
            Self::Only(id) => Some(id),
        }
    }
}

/// Input for one quiz round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRoundRequest {
    /// Questions already asked in this quiz, in the order the client sent them.
    pub previous_questions: Vec<QuestionId>,
    pub category: QuizCategory,
}

/// Result of one quiz round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizRound {
    /// A question drawn from the candidate pool, with the echoed history.
    Next {
        previous_questions: Vec<QuestionId>,
        question: Question,
    },
    /// The candidate pool is empty.
    Exhausted,
}

impl QuizRound {
    /// The drawn question, if any.
    #[must_use]
    pub fn question(&self) -> Option<&Question> {
        match self {
            Self::Next { question, .. } => Some(question),
            Self::Exhausted => None,
        }
    }
}
