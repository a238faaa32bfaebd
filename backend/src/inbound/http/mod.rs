//! HTTP inbound adapter exposing the trivia REST endpoints.

use actix_web::web;

pub mod categories;
pub mod cors;
pub mod error;
pub mod health;
pub mod questions;
pub mod quizzes;
pub mod request_config;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::ApiResult;

/// Register every trivia endpoint and its extractor configuration on `cfg`.
///
/// Health probes and the fallback route are registered by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(request_config::json_config())
        .app_data(request_config::path_config())
        .app_data(request_config::query_config())
        .service(categories::list_categories)
        .service(categories::questions_by_category)
        .service(questions::list_questions)
        .service(questions::delete_question)
        .service(questions::add_question)
        .service(questions::search_questions)
        .service(quizzes::next_quiz_question);
}
