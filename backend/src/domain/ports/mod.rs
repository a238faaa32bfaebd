//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`*Query`, `*Command`) are consumed by inbound adapters and
//! implemented by [`crate::domain::TriviaService`]. Driven ports
//! (`*Repository`) are implemented by outbound adapters and consumed by the
//! service. Driven ports expose typed errors so adapters map their failures
//! into predictable variants.

mod macros;
pub(crate) use macros::define_port_error;

mod category_repository;
mod question_repository;
mod questions_command;
mod questions_query;
mod quiz_query;

#[cfg(test)]
pub use category_repository::MockCategoryRepository;
pub use category_repository::{CategoryRepository, CategoryRepositoryError};
#[cfg(test)]
pub use question_repository::MockQuestionRepository;
pub use question_repository::{QuestionRepository, QuestionRepositoryError};
#[cfg(test)]
pub use questions_command::MockQuestionsCommand;
pub use questions_command::QuestionsCommand;
#[cfg(test)]
pub use questions_query::{MockCategoriesQuery, MockQuestionsQuery};
pub use questions_query::{CategoriesQuery, QuestionList, QuestionPage, QuestionsQuery};
#[cfg(test)]
pub use quiz_query::MockQuizQuery;
pub use quiz_query::QuizQuery;
