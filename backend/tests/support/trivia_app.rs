//! Full-stack app wiring over the in-memory store.

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test, web};

use trivia_api::Trace;
use trivia_api::domain::ports::QuestionRepository;
use trivia_api::domain::{CategoryId, EmptyCategoryPolicy, NewQuestion, TriviaService};
use trivia_api::inbound::http::cors::cors_headers;
use trivia_api::inbound::http::request_config::route_fallback;
use trivia_api::inbound::http::state::HttpState;
use trivia_api::outbound::memory::InMemoryTriviaStore;

/// Insert one question per `(text, category)` pair; ids follow input order
/// starting at 1.
pub async fn seed(store: &InMemoryTriviaStore, questions: &[(&str, i32)]) {
    for (text, category) in questions {
        store
            .insert(&NewQuestion {
                question: (*text).to_owned(),
                answer: format!("answer to {text}"),
                category: CategoryId::new(*category),
                difficulty: 1,
            })
            .await
            .expect("seed insert");
    }
}

/// Build the trivia app with the production middleware stack.
pub async fn init_app(
    store: Arc<InMemoryTriviaStore>,
    policy: EmptyCategoryPolicy,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    let service = TriviaService::new(store.clone(), store).with_empty_category_policy(policy);
    let state = HttpState::from_service(Arc::new(service));
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(cors_headers())
            .wrap(Trace)
            .configure(trivia_api::inbound::http::configure)
            .default_service(web::to(route_fallback)),
    )
    .await
}
