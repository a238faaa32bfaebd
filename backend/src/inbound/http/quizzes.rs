//! Quiz play endpoint.
//!
//! ```text
//! POST /quizzes {"previous_questions":[4,9],"quiz_category":{"type":"Science","id":"1"}}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Question, QuestionId, QuizCategory, QuizRound, QuizRoundRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::schemas::QuestionSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, IntOrString, missing_field_error, required_int};

/// Category selector sent by the quiz client.
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizCategoryRequest {
    /// Category id; `0` selects every category.
    pub id: Option<IntOrString>,
    /// Display label echoed by the client; ignored.
    #[serde(rename = "type")]
    #[schema(value_type = Option<String>)]
    pub kind: Option<serde_json::Value>,
}

/// Quiz round payload.
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizRequest {
    /// Ids of questions already asked in this quiz.
    #[schema(example = json!([4, 9]))]
    pub previous_questions: Option<Vec<i32>>,
    pub quiz_category: Option<QuizCategoryRequest>,
}

const PREVIOUS_QUESTIONS: FieldName = FieldName::new("previous_questions");
const QUIZ_CATEGORY: FieldName = FieldName::new("quiz_category");
const QUIZ_CATEGORY_ID: FieldName = FieldName::new("quiz_category.id");

impl TryFrom<QuizRequest> for QuizRoundRequest {
    type Error = Error;

    fn try_from(request: QuizRequest) -> Result<Self, Self::Error> {
        let previous = request
            .previous_questions
            .ok_or_else(|| missing_field_error(PREVIOUS_QUESTIONS))?;
        let category = request
            .quiz_category
            .ok_or_else(|| missing_field_error(QUIZ_CATEGORY))?;
        let category_id = required_int(category.id.as_ref(), QUIZ_CATEGORY_ID)?;
        Ok(Self {
            previous_questions: previous.into_iter().map(QuestionId::new).collect(),
            category: QuizCategory::from_wire_id(category_id),
        })
    }
}

/// A drawn question and the echoed history.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuizQuestionResponse {
    pub success: bool,
    #[schema(value_type = Vec<i32>)]
    pub previous_questions: Vec<QuestionId>,
    #[schema(value_type = QuestionSchema)]
    pub question: Question,
}

/// Signals that no unasked question remains.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuizExhaustedResponse {
    pub success: bool,
    /// Always `false`.
    #[schema(example = false)]
    pub questions: bool,
}

/// Draw the next quiz question.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequest,
    description = "Draws one question uniformly at random from those not yet asked. \
        A quiz_category id of 0 draws from every category.",
    responses(
        (
            status = 200,
            description = "Next question, or a QuizExhaustedResponse once every question was asked",
            body = QuizQuestionResponse
        ),
        (status = 422, description = "Malformed request or store failure", body = ErrorEnvelope)
    ),
    tags = ["quizzes"],
    operation_id = "nextQuizQuestion"
)]
#[post("/quizzes")]
pub async fn next_quiz_question(
    state: web::Data<HttpState>,
    payload: web::Json<QuizRequest>,
) -> ApiResult<HttpResponse> {
    let request = QuizRoundRequest::try_from(payload.into_inner())?;
    let response = match state.quiz.next_question(request).await? {
        QuizRound::Next {
            previous_questions,
            question,
        } => HttpResponse::Ok().json(QuizQuestionResponse {
            success: true,
            previous_questions,
            question,
        }),
        QuizRound::Exhausted => HttpResponse::Ok().json(QuizExhaustedResponse {
            success: true,
            questions: false,
        }),
    };
    Ok(response)
}

#[cfg(test)]
mod tests {
    //! Handler coverage for quiz play.
    use super::*;
    use crate::domain::CategoryId;
    use crate::inbound::http::test_utils::{MockPorts, question, send};
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn quiz(payload: Value) -> TestRequest {
        TestRequest::post().uri("/quizzes").set_json(payload)
    }

    #[rstest]
    #[case(json!({"type": "Science", "id": "1"}), QuizCategory::Only(CategoryId::new(1)))]
    #[case(json!({"type": "click", "id": 0}), QuizCategory::All)]
    #[actix_web::test]
    async fn draws_a_question_and_echoes_history(
        #[case] quiz_category: Value,
        #[case] expected: QuizCategory,
    ) {
        let mut ports = MockPorts::default();
        ports
            .quiz
            .expect_next_question()
            .withf(move |request| {
                request.category == expected
                    && request.previous_questions == vec![QuestionId::new(1)]
            })
            .times(1)
            .returning(|request| {
                Ok(QuizRound::Next {
                    previous_questions: request.previous_questions,
                    question: question(2, 1),
                })
            });

        let (status, body) = send(
            ports,
            quiz(json!({"previous_questions": [1], "quiz_category": quiz_category})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["previous_questions"], json!([1]));
        assert_eq!(body["question"]["id"], 2);
    }

    #[rstest]
    #[actix_web::test]
    async fn exhausted_pool_reports_no_questions() {
        let mut ports = MockPorts::default();
        ports
            .quiz
            .expect_next_question()
            .returning(|_| Ok(QuizRound::Exhausted));

        let (status, body) = send(
            ports,
            quiz(json!({"previous_questions": [1, 2], "quiz_category": {"id": 1}})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true, "questions": false}));
    }

    #[rstest]
    #[case(json!({"quiz_category": {"id": 1}}))]
    #[case(json!({"previous_questions": []}))]
    #[case(json!({"previous_questions": [], "quiz_category": {"type": "Art"}}))]
    #[case(json!({"previous_questions": [], "quiz_category": {"id": null}}))]
    #[case(json!({"previous_questions": "1,2", "quiz_category": {"id": 1}}))]
    #[case(json!({"previous_questions": [], "quiz_category": 1}))]
    #[actix_web::test]
    async fn malformed_requests_are_unprocessable(#[case] payload: Value) {
        let (status, body) = send(MockPorts::default(), quiz(payload)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], 422);
    }

    #[rstest]
    #[actix_web::test]
    async fn store_failure_is_unprocessable() {
        let mut ports = MockPorts::default();
        ports
            .quiz
            .expect_next_question()
            .returning(|_| Err(Error::unprocessable("quiz candidates unavailable")));

        let (status, _) = send(
            ports,
            quiz(json!({"previous_questions": [], "quiz_category": {"id": 0}})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
