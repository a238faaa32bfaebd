//! Test helpers for inbound HTTP handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::Value;

use crate::domain::ports::{
    MockCategoriesQuery, MockQuestionsCommand, MockQuestionsQuery, MockQuizQuery,
};
use crate::domain::{CategoryId, Question, QuestionId};
use crate::inbound::http::request_config::route_fallback;
use crate::inbound::http::state::HttpState;

/// One mock per driving port. Ports left untouched reject every call.
#[derive(Default)]
pub struct MockPorts {
    pub categories: MockCategoriesQuery,
    pub questions: MockQuestionsQuery,
    pub command: MockQuestionsCommand,
    pub quiz: MockQuizQuery,
}

impl MockPorts {
    pub fn into_state(self) -> HttpState {
        HttpState::new(
            Arc::new(self.categories),
            Arc::new(self.questions),
            Arc::new(self.command),
            Arc::new(self.quiz),
        )
    }
}

/// Route `req` through the full trivia route table backed by `ports`.
pub async fn send(ports: MockPorts, req: test::TestRequest) -> (StatusCode, Value) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(ports.into_state()))
            .configure(crate::inbound::http::configure)
            .default_service(web::to(route_fallback)),
    )
    .await;
    let res = test::call_service(&app, req.to_request()).await;
    let status = res.status();
    (status, test::read_body_json(res).await)
}

pub fn question(id: i32, category: i32) -> Question {
    Question {
        id: QuestionId::new(id),
        question: format!("Question {id}?"),
        answer: format!("Answer {id}"),
        category: CategoryId::new(category),
        difficulty: 2,
    }
}
