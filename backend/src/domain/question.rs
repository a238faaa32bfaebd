//! Trivia questions and categories.
//!
//! Purpose: define the records the service reads and writes. These types are
//! also the formatted shapes returned to clients, so their serde field names
//! are part of the public contract:
//!
//! - [`Question`] serialises as `{id, question, answer, category, difficulty}`.
//! - [`CategoryMap`] serialises as an object keyed by the stringified
//!   category id, e.g. `{"1": "Science"}`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned question identifier.
///
/// Identifiers are monotonic by insertion and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(i32);

impl QuestionId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(i32);

impl CategoryId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored trivia question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    /// Category reference; not checked against existing categories.
    pub category: CategoryId,
    pub difficulty: i32,
}

/// A question category. Read-only from the service's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    /// Human-readable label, exposed as `type` on the wire.
    pub kind: String,
}

/// Mapping from category id to its label covering every category.
pub type CategoryMap = BTreeMap<CategoryId, String>;

/// Collect categories into the id-to-label mapping returned to clients.
pub fn category_map(categories: impl IntoIterator<Item = Category>) -> CategoryMap {
    categories
        .into_iter()
        .map(|category| (category.id, category.kind))
        .collect()
}

/// A question awaiting insertion. The store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

/// Raw, possibly incomplete input for [`NewQuestion`].
///
/// Every field is optional so that inbound adapters can hand over whatever
/// the client sent and let [`NewQuestion::try_from_draft`] decide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionDraft {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i32>,
    pub difficulty: Option<i32>,
}

/// The field missing from a [`QuestionDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("missing required field: {0}")]
pub struct MissingField(pub &'static str);

impl NewQuestion {
    /// Build a question from a draft, requiring all four fields.
    ///
    /// Blank text counts as missing; no other validation is applied.
    ///
    /// # Examples
    /// ```
    /// use trivia_api::domain::{NewQuestion, QuestionDraft};
    ///
    /// let draft = QuestionDraft {
    ///     question: Some("What is the largest planet?".into()),
    ///     answer: Some("Jupiter".into()),
    ///     category: Some(1),
    ///     difficulty: None,
    /// };
    /// let err = NewQuestion::try_from_draft(draft).expect_err("difficulty missing");
    /// assert_eq!(err.0, "difficulty");
    /// ```
    pub fn try_from_draft(draft: QuestionDraft) -> Result<Self, MissingField> {
        let QuestionDraft {
            question,
            answer,
            category,
            difficulty,
        } = draft;
        Ok(Self {
            question: non_blank(question).ok_or(MissingField("question"))?,
            answer: non_blank(answer).ok_or(MissingField("answer"))?,
            category: category.map(CategoryId::new).ok_or(MissingField("category"))?,
            difficulty: difficulty.ok_or(MissingField("difficulty"))?,
        })
    }

    /// Attach the identifier assigned by the store.
    #[must_use]
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn complete_draft() -> QuestionDraft {
        QuestionDraft {
            question: Some("Who painted the Mona Lisa?".to_owned()),
            answer: Some("Leonardo da Vinci".to_owned()),
            category: Some(2),
            difficulty: Some(1),
        }
    }

    #[rstest]
    fn complete_draft_builds(complete_draft: QuestionDraft) {
        let built = NewQuestion::try_from_draft(complete_draft).expect("all fields present");
        assert_eq!(built.category, CategoryId::new(2));
        assert_eq!(built.difficulty, 1);
    }

    #[rstest]
    #[case::question(|d: &mut QuestionDraft| d.question = None, "question")]
    #[case::blank_question(|d: &mut QuestionDraft| d.question = Some("  ".into()), "question")]
    #[case::answer(|d: &mut QuestionDraft| d.answer = None, "answer")]
    #[case::category(|d: &mut QuestionDraft| d.category = None, "category")]
    #[case::difficulty(|d: &mut QuestionDraft| d.difficulty = None, "difficulty")]
    fn missing_fields_are_named(
        mut complete_draft: QuestionDraft,
        #[case] strip: fn(&mut QuestionDraft),
        #[case] field: &str,
    ) {
        strip(&mut complete_draft);
        let err = NewQuestion::try_from_draft(complete_draft).expect_err("field missing");
        assert_eq!(err.0, field);
    }

    #[rstest]
    fn question_serialises_as_formatted_record() {
        let question = Question {
            id: QuestionId::new(4),
            question: "Capital of France?".to_owned(),
            answer: "Paris".to_owned(),
            category: CategoryId::new(3),
            difficulty: 2,
        };
        let value = serde_json::to_value(&question).expect("serialises");
        assert_eq!(
            value,
            json!({
                "id": 4,
                "question": "Capital of France?",
                "answer": "Paris",
                "category": 3,
                "difficulty": 2
            })
        );
    }

    #[rstest]
    fn category_map_keys_by_stringified_id() {
        let map = category_map([
            Category {
                id: CategoryId::new(2),
                kind: "Art".to_owned(),
            },
            Category {
                id: CategoryId::new(1),
                kind: "Science".to_owned(),
            },
        ]);
        let value = serde_json::to_value(&map).expect("serialises");
        assert_eq!(value, json!({ "1": "Science", "2": "Art" }));
    }
}
