//! Question endpoints.
//!
//! ```text
//! GET /questions?page=1
//! DELETE /questions/{id}
//! POST /questions {"question":"...","answer":"...","category":"1","difficulty":3}
//! POST /questionsSearch {"searchTerm":"title"}
//! ```

use std::collections::BTreeMap;

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{CategoryId, CategoryMap, Question, QuestionDraft, QuestionId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::schemas::QuestionSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, IntOrString, missing_field_error, optional_int};

/// Query parameters for the paginated listing.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// 1-based page number. Absent or non-integer values mean page 1.
    #[param(value_type = Option<i64>, example = 1)]
    pub page: Option<String>,
}

impl PageParams {
    fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(1)
    }
}

/// One page of the question listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionPageResponse {
    pub success: bool,
    #[schema(value_type = Vec<QuestionSchema>)]
    pub questions: Vec<Question>,
    /// Count of every stored question.
    pub total_questions: usize,
    #[schema(value_type = BTreeMap<String, String>)]
    pub categories: CategoryMap,
    /// Always `null`.
    #[schema(value_type = Option<i32>)]
    pub current_category: Option<CategoryId>,
}

/// Search matches.
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponse {
    pub success: bool,
    #[schema(value_type = Vec<QuestionSchema>)]
    pub questions: Vec<Question>,
    pub total_questions: usize,
    /// Always `null`.
    #[schema(value_type = Option<i32>)]
    pub current_category: Option<CategoryId>,
}

/// Bare acknowledgement.
#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessResponse {
    #[schema(example = true)]
    pub success: bool,
}

impl SuccessResponse {
    fn ok() -> Self {
        Self { success: true }
    }
}

/// New question payload. Every field is required.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddQuestionRequest {
    #[schema(example = "Who invented Peanut Butter?")]
    pub question: Option<String>,
    #[schema(example = "George Washington Carver")]
    pub answer: Option<String>,
    /// Category id as a number or a numeric string.
    pub category: Option<IntOrString>,
    /// Difficulty as a number or a numeric string.
    pub difficulty: Option<IntOrString>,
}

impl From<AddQuestionRequest> for QuestionDraft {
    fn from(request: AddQuestionRequest) -> Self {
        Self {
            question: request.question,
            answer: request.answer,
            category: optional_int(request.category.as_ref()),
            difficulty: optional_int(request.difficulty.as_ref()),
        }
    }
}

/// Search payload.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    #[schema(example = "title")]
    pub search_term: Option<String>,
}

const SEARCH_TERM: FieldName = FieldName::new("searchTerm");

/// List one page of questions with every category.
#[utoipa::path(
    get,
    path = "/questions",
    params(PageParams),
    responses(
        (status = 200, description = "Question page", body = QuestionPageResponse),
        (status = 404, description = "Page is empty", body = ErrorEnvelope),
        (status = 500, description = "Server error", body = ErrorEnvelope)
    ),
    tags = ["questions"],
    operation_id = "listQuestions"
)]
#[get("/questions")]
pub async fn list_questions(
    state: web::Data<HttpState>,
    params: web::Query<PageParams>,
) -> ApiResult<HttpResponse> {
    let page = state.questions.list_questions(params.page()).await?;
    Ok(HttpResponse::Ok().json(QuestionPageResponse {
        success: true,
        questions: page.questions,
        total_questions: page.total_questions,
        categories: page.categories,
        current_category: None,
    }))
}

/// Delete one question.
#[utoipa::path(
    delete,
    path = "/questions/{question_id}",
    params(("question_id" = i32, Path, description = "Question id")),
    responses(
        (status = 200, description = "Question deleted", body = SuccessResponse),
        (status = 404, description = "No such question or delete failed", body = ErrorEnvelope)
    ),
    tags = ["questions"],
    operation_id = "deleteQuestion"
)]
#[delete("/questions/{question_id}")]
pub async fn delete_question(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let id = QuestionId::new(path.into_inner());
    state.questions_command.delete_question(id).await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

/// Create a question.
#[utoipa::path(
    post,
    path = "/questions",
    request_body = AddQuestionRequest,
    responses(
        (status = 200, description = "Question created", body = SuccessResponse),
        (status = 422, description = "Missing field or store failure", body = ErrorEnvelope)
    ),
    tags = ["questions"],
    operation_id = "addQuestion"
)]
#[post("/questions")]
pub async fn add_question(
    state: web::Data<HttpState>,
    payload: web::Json<AddQuestionRequest>,
) -> ApiResult<HttpResponse> {
    state
        .questions_command
        .add_question(payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

/// Case-insensitive substring search over question text.
#[utoipa::path(
    post,
    path = "/questionsSearch",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Matching questions", body = SearchResponse),
        (status = 404, description = "Nothing matched", body = ErrorEnvelope),
        (status = 422, description = "searchTerm missing", body = ErrorEnvelope),
        (status = 500, description = "Server error", body = ErrorEnvelope)
    ),
    tags = ["questions"],
    operation_id = "searchQuestions"
)]
#[post("/questionsSearch")]
pub async fn search_questions(
    state: web::Data<HttpState>,
    payload: web::Json<SearchRequest>,
) -> ApiResult<HttpResponse> {
    let term = payload
        .into_inner()
        .search_term
        .ok_or_else(|| missing_field_error(SEARCH_TERM))?;
    let matches = state.questions.search_questions(&term).await?;
    Ok(HttpResponse::Ok().json(SearchResponse {
        success: true,
        questions: matches.questions,
        total_questions: matches.total_questions,
        current_category: None,
    }))
}

#[cfg(test)]
#[path = "questions_tests.rs"]
mod tests;
