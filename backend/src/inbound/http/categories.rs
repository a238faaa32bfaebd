//! Category endpoints.
//!
//! ```text
//! GET /categories
//! GET /categories/{id}/questions
//! ```

use std::collections::BTreeMap;

use actix_web::{HttpResponse, get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{CategoryId, CategoryMap, Question};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::schemas::QuestionSchema;
use crate::inbound::http::state::HttpState;

/// Every category keyed by id.
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoriesResponse {
    pub success: bool,
    #[schema(value_type = BTreeMap<String, String>, example = json!({"1": "Science", "2": "Art"}))]
    pub categories: CategoryMap,
}

/// Questions of one category.
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    #[schema(value_type = Vec<QuestionSchema>)]
    pub questions: Vec<Question>,
    pub total_questions: usize,
    /// Always `null`.
    #[schema(value_type = Option<i32>)]
    pub current_category: Option<CategoryId>,
}

/// List every category.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Category mapping", body = CategoriesResponse),
        (status = 500, description = "Server error", body = ErrorEnvelope)
    ),
    tags = ["categories"],
    operation_id = "listCategories"
)]
#[get("/categories")]
pub async fn list_categories(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let categories = state.categories.list_categories().await?;
    Ok(HttpResponse::Ok().json(CategoriesResponse {
        success: true,
        categories,
    }))
}

/// List the questions of one category.
#[utoipa::path(
    get,
    path = "/categories/{category_id}/questions",
    params(("category_id" = i32, Path, description = "Category id")),
    description = "An empty category answers 405 by default; deployments with \
        TRIVIA_LEGACY_CATEGORY_STATUS=false answer 404 instead.",
    responses(
        (status = 200, description = "Questions in the category", body = CategoryQuestionsResponse),
        (status = 404, description = "Unknown route or empty category", body = ErrorEnvelope),
        (status = 405, description = "Empty category (legacy status)", body = ErrorEnvelope),
        (status = 500, description = "Server error", body = ErrorEnvelope)
    ),
    tags = ["categories"],
    operation_id = "questionsByCategory"
)]
#[get("/categories/{category_id}/questions")]
pub async fn questions_by_category(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let category = CategoryId::new(path.into_inner());
    let list = state.questions.questions_by_category(category).await?;
    Ok(HttpResponse::Ok().json(CategoryQuestionsResponse {
        success: true,
        questions: list.questions,
        total_questions: list.total_questions,
        current_category: None,
    }))
}
