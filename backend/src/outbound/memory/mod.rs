//! In-process trivia store.
//!
//! Implements both driven ports over a single mutex-guarded state so every
//! operation, including the lookup-then-remove of a delete, happens as one
//! atomic unit. Used when no database is configured and by tests.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::warn;

use crate::domain::ports::{
    CategoryRepository, CategoryRepositoryError, QuestionRepository, QuestionRepositoryError,
};
use crate::domain::{Category, CategoryId, NewQuestion, Question, QuestionId};

/// Stock categories of the trivia frontend, in id order.
pub const DEFAULT_CATEGORIES: [(i32, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

#[derive(Debug, Default)]
struct StoreState {
    questions: Vec<Question>,
    categories: Vec<Category>,
    last_id: i32,
}

/// Mutex-guarded store of questions and categories.
///
/// Questions are kept in insertion order, which is also ascending id order.
/// Identifiers come from a counter that only moves forward, so deleting the
/// newest question never frees its id for reuse.
#[derive(Debug, Default)]
pub struct InMemoryTriviaStore {
    state: Mutex<StoreState>,
}

impl InMemoryTriviaStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding [`DEFAULT_CATEGORIES`] and no questions.
    pub fn with_default_categories() -> Self {
        Self::new().with_categories(
            DEFAULT_CATEGORIES
                .iter()
                .map(|(id, kind)| Category {
                    id: CategoryId::new(*id),
                    kind: (*kind).to_owned(),
                }),
        )
    }

    /// Replace the category set.
    #[must_use]
    pub fn with_categories(self, categories: impl IntoIterator<Item = Category>) -> Self {
        if let Ok(mut state) = self.state.lock() {
            state.categories = categories.into_iter().collect();
        }
        self
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, QuestionRepositoryError> {
        self.state.lock().map_err(|_| {
            warn!("trivia store mutex poisoned");
            QuestionRepositoryError::connection("in-memory store poisoned")
        })
    }

    fn select<F>(&self, keep: F) -> Result<Vec<Question>, QuestionRepositoryError>
    where
        F: Fn(&Question) -> bool,
    {
        let state = self.lock()?;
        Ok(state.questions.iter().filter(|q| keep(q)).cloned().collect())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryTriviaStore {
    async fn find_all(&self) -> Result<Vec<Question>, QuestionRepositoryError> {
        self.select(|_| true)
    }

    async fn find_by_id(
        &self,
        id: QuestionId,
    ) -> Result<Option<Question>, QuestionRepositoryError> {
        let state = self.lock()?;
        Ok(state.questions.iter().find(|q| q.id == id).cloned())
    }

    async fn find_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        self.select(|q| q.category == category)
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, QuestionRepositoryError> {
        let needle = term.to_lowercase();
        self.select(|q| q.question.to_lowercase().contains(&needle))
    }

    async fn find_candidates(
        &self,
        excluded: &[QuestionId],
        category: Option<CategoryId>,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        self.select(|q| !excluded.contains(&q.id) && category.is_none_or(|c| q.category == c))
    }

    async fn insert(&self, question: &NewQuestion) -> Result<QuestionId, QuestionRepositoryError> {
        let mut state = self.lock()?;
        let next = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| QuestionRepositoryError::query("question id space exhausted"))?;
        let id = QuestionId::new(next);
        state.last_id = next;
        state.questions.push(question.clone().into_question(id));
        Ok(id)
    }

    async fn delete(&self, id: QuestionId) -> Result<bool, QuestionRepositoryError> {
        let mut state = self.lock()?;
        let Some(index) = state.questions.iter().position(|q| q.id == id) else {
            return Ok(false);
        };
        state.questions.remove(index);
        Ok(true)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryTriviaStore {
    async fn find_all(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        let state = self
            .state
            .lock()
            .map_err(|_| CategoryRepositoryError::connection("in-memory store poisoned"))?;
        Ok(state.categories.clone())
    }
}
