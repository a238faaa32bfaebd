//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] aggregates every trivia endpoint, the health probes and the
//! request and response schemas. The document backs Swagger UI in debug
//! builds and is exported by `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::categories::{CategoriesResponse, CategoryQuestionsResponse};
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::questions::{
    AddQuestionRequest, QuestionPageResponse, SearchRequest, SearchResponse, SuccessResponse,
};
use crate::inbound::http::quizzes::{
    QuizCategoryRequest, QuizExhaustedResponse, QuizQuestionResponse, QuizRequest,
};
use crate::inbound::http::schemas::QuestionSchema;
use crate::inbound::http::validation::IntOrString;

/// OpenAPI document for the trivia API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trivia API",
        description = "JSON API for browsing, adding, searching and playing trivia questions."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::categories::list_categories,
        crate::inbound::http::categories::questions_by_category,
        crate::inbound::http::questions::list_questions,
        crate::inbound::http::questions::delete_question,
        crate::inbound::http::questions::add_question,
        crate::inbound::http::questions::search_questions,
        crate::inbound::http::quizzes::next_quiz_question,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorEnvelope,
        QuestionSchema,
        IntOrString,
        CategoriesResponse,
        CategoryQuestionsResponse,
        QuestionPageResponse,
        SearchResponse,
        SuccessResponse,
        AddQuestionRequest,
        SearchRequest,
        QuizRequest,
        QuizCategoryRequest,
        QuizQuestionResponse,
        QuizExhaustedResponse,
    )),
    tags(
        (name = "categories", description = "Category listing"),
        (name = "questions", description = "Question listing, creation, deletion and search"),
        (name = "quizzes", description = "Quiz play"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated document.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    #[rstest]
    #[case("/categories")]
    #[case("/categories/{category_id}/questions")]
    #[case("/questions")]
    #[case("/questions/{question_id}")]
    #[case("/questionsSearch")]
    #[case("/quizzes")]
    #[case("/health/ready")]
    fn every_endpoint_is_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "{path} missing");
    }

    #[rstest]
    fn error_envelope_schema_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.schemas.contains_key("crate.domain.Question"));

        let envelope = components.schemas.get("ErrorEnvelope").expect("ErrorEnvelope schema");
        match envelope {
            RefOr::T(Schema::Object(obj)) => {
                for field in ["success", "error", "Message"] {
                    assert!(obj.properties.contains_key(field), "missing '{field}'");
                }
            }
            _ => panic!("expected Object schema"),
        }
    }
}
