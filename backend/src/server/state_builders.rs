//! Builders wiring repositories into the HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use trivia_api::domain::TriviaService;
use trivia_api::domain::ports::{CategoryRepository, QuestionRepository};
use trivia_api::inbound::http::state::HttpState;
use trivia_api::outbound::memory::InMemoryTriviaStore;
use trivia_api::outbound::persistence::{DieselCategoryRepository, DieselQuestionRepository};

use super::ServerConfig;

fn service_state<Q, C>(questions: Arc<Q>, categories: Arc<C>, config: &ServerConfig) -> HttpState
where
    Q: QuestionRepository + 'static,
    C: CategoryRepository + 'static,
{
    let service = TriviaService::new(questions, categories)
        .with_page_size(config.page_size)
        .with_empty_category_policy(config.empty_category);
    HttpState::from_service(Arc::new(service))
}

/// Build the HTTP state, backed by PostgreSQL when a pool is configured and
/// by a fresh in-memory store otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            info!("serving questions from PostgreSQL");
            service_state(
                Arc::new(DieselQuestionRepository::new(pool.clone())),
                Arc::new(DieselCategoryRepository::new(pool.clone())),
                config,
            )
        }
        None => {
            info!("no database configured; serving an in-memory store");
            let store = Arc::new(InMemoryTriviaStore::with_default_categories());
            service_state(store.clone(), store, config)
        }
    };
    web::Data::new(state)
}
