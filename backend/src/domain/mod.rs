//! Domain primitives, ports and the trivia service.
//!
//! Purpose: hold the transport-agnostic core. Types here never depend on
//! actix-web or Diesel; adapters translate to and from them.
//!
//! Public surface:
//! - [`Question`], [`Category`], [`NewQuestion`], [`QuestionDraft`]: records.
//! - [`QuizCategory`], [`QuizRoundRequest`], [`QuizRound`]: quiz play.
//! - [`Error`], [`ErrorCode`]: the failure taxonomy.
//! - [`TriviaService`]: implementation of every driving port in [`ports`].

pub mod error;
pub mod pagination;
pub mod ports;
mod question;
mod quiz;
mod trace_id;
mod trivia_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::question::{
    Category, CategoryId, CategoryMap, MissingField, NewQuestion, Question, QuestionDraft,
    QuestionId, category_map,
};
pub use self::quiz::{QuizCategory, QuizRound, QuizRoundRequest};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::trivia_service::{EmptyCategoryPolicy, TriviaService};
