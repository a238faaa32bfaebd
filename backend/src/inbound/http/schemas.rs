//! OpenAPI schema definitions for domain types.
//!
//! Domain records do not derive `ToSchema`; these wrappers mirror their wire
//! shape so the adapter layer owns framework concerns.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::Question`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Question)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct QuestionSchema {
    #[schema(example = 12)]
    id: i32,
    #[schema(example = "Who invented Peanut Butter?")]
    question: String,
    #[schema(example = "George Washington Carver")]
    answer: String,
    /// Category id; not checked against existing categories.
    #[schema(example = 4)]
    category: i32,
    #[schema(example = 2)]
    difficulty: i32,
}
