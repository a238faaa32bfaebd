//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{CategoriesQuery, QuestionsCommand, QuestionsQuery, QuizQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub categories: Arc<dyn CategoriesQuery>,
    pub questions: Arc<dyn QuestionsQuery>,
    pub questions_command: Arc<dyn QuestionsCommand>,
    pub quiz: Arc<dyn QuizQuery>,
}

impl HttpState {
    pub fn new(
        categories: Arc<dyn CategoriesQuery>,
        questions: Arc<dyn QuestionsQuery>,
        questions_command: Arc<dyn QuestionsCommand>,
        quiz: Arc<dyn QuizQuery>,
    ) -> Self {
        Self {
            categories,
            questions,
            questions_command,
            quiz,
        }
    }

    /// Route every port to one service implementing all of them.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use trivia_api::domain::TriviaService;
    /// use trivia_api::inbound::http::state::HttpState;
    /// use trivia_api::outbound::memory::InMemoryTriviaStore;
    ///
    /// let store = Arc::new(InMemoryTriviaStore::with_default_categories());
    /// let state = HttpState::from_service(Arc::new(TriviaService::new(store.clone(), store)));
    /// # let _ = state;
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: CategoriesQuery + QuestionsQuery + QuestionsCommand + QuizQuery + 'static,
    {
        Self {
            categories: service.clone(),
            questions: service.clone(),
            questions_command: service.clone(),
            quiz: service,
        }
    }
}
