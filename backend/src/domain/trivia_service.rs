//! Trivia domain service.
//!
//! This module implements the driving ports for categories, questions and
//! quiz play on top of the question and category repositories. It owns the
//! pagination window, the empty-result rules of each listing, and the quiz
//! candidate selection. Repository failures never escape as-is: each
//! operation translates them into the error code its endpoint promises.

use std::sync::Arc;

use async_trait::async_trait;
use rand::seq::SliceRandom;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::pagination::{PageSize, page_window};
use crate::domain::ports::{
    CategoriesQuery, CategoryRepository, CategoryRepositoryError, QuestionList, QuestionPage,
    QuestionRepository, QuestionRepositoryError, QuestionsCommand, QuestionsQuery, QuizQuery,
};
use crate::domain::{
    CategoryId, CategoryMap, Error, NewQuestion, Question, QuestionDraft, QuestionId, QuizRound,
    QuizRoundRequest, category_map,
};

/// Error signalled when a category has no questions.
///
/// Historically the category listing answered an empty category with
/// "method not allowed"; existing clients may depend on that status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyCategoryPolicy {
    /// Signal [`crate::domain::ErrorCode::MethodNotAllowed`].
    #[default]
    Legacy,
    /// Signal [`crate::domain::ErrorCode::NotFound`].
    NotFound,
}

impl EmptyCategoryPolicy {
    /// Select the policy from the legacy-status flag.
    #[must_use]
    pub const fn from_legacy_flag(legacy: bool) -> Self {
        if legacy { Self::Legacy } else { Self::NotFound }
    }

    fn error(self, category: CategoryId) -> Error {
        let message = format!("category {category} has no questions");
        match self {
            Self::Legacy => Error::method_not_allowed(message),
            Self::NotFound => Error::not_found(message),
        }
    }
}

/// Trivia service implementing the driving ports.
#[derive(Clone)]
pub struct TriviaService<Q, C> {
    questions: Arc<Q>,
    categories: Arc<C>,
    page_size: PageSize,
    empty_category: EmptyCategoryPolicy,
}

impl<Q, C> TriviaService<Q, C> {
    /// Create a service with the default page size and the legacy empty
    /// category signal.
    pub fn new(questions: Arc<Q>, categories: Arc<C>) -> Self {
        Self {
            questions,
            categories,
            page_size: PageSize::default(),
            empty_category: EmptyCategoryPolicy::default(),
        }
    }

    /// Override the number of questions per page.
    #[must_use]
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Override the error used for an empty category listing.
    #[must_use]
    pub fn with_empty_category_policy(mut self, policy: EmptyCategoryPolicy) -> Self {
        self.empty_category = policy;
        self
    }
}

fn question_store_internal(error: QuestionRepositoryError) -> Error {
    Error::internal(format!("question store unavailable: {error}"))
}

fn category_store_internal(error: CategoryRepositoryError) -> Error {
    Error::internal(format!("category store unavailable: {error}"))
}

/// Choose one question uniformly at random.
fn pick_uniform(pool: &[Question]) -> Option<Question> {
    pool.choose(&mut rand::thread_rng()).cloned()
}

impl<Q, C> TriviaService<Q, C>
where
    Q: QuestionRepository,
    C: CategoryRepository,
{
    async fn all_categories(&self) -> Result<CategoryMap, Error> {
        let categories = self
            .categories
            .find_all()
            .await
            .map_err(category_store_internal)?;
        Ok(category_map(categories))
    }
}

#[async_trait]
impl<Q, C> CategoriesQuery for TriviaService<Q, C>
where
    Q: QuestionRepository,
    C: CategoryRepository,
{
    async fn list_categories(&self) -> Result<CategoryMap, Error> {
        self.all_categories().await
    }
}

#[async_trait]
impl<Q, C> QuestionsQuery for TriviaService<Q, C>
where
    Q: QuestionRepository,
    C: CategoryRepository,
{
    async fn list_questions(&self, page: i64) -> Result<QuestionPage, Error> {
        let questions = self
            .questions
            .find_all()
            .await
            .map_err(question_store_internal)?;
        let categories = self.all_categories().await?;

        let window = page_window(&questions, page, self.page_size);
        if window.is_empty() {
            return Err(Error::not_found(format!("page {page} is empty")).with_details(json!({
                "page": page,
                "totalQuestions": questions.len(),
            })));
        }
        debug!(page, shown = window.len(), total = questions.len(), "listing questions");

        Ok(QuestionPage {
            questions: window.to_vec(),
            total_questions: questions.len(),
            categories,
        })
    }

    async fn search_questions(&self, term: &str) -> Result<QuestionList, Error> {
        let matches = self
            .questions
            .search(term)
            .await
            .map_err(question_store_internal)?;
        if matches.is_empty() {
            return Err(Error::not_found(format!("no question matches {term:?}")));
        }
        debug!(term, matches = matches.len(), "search matched questions");
        Ok(QuestionList::from(matches))
    }

    async fn questions_by_category(&self, category: CategoryId) -> Result<QuestionList, Error> {
        let questions = self
            .questions
            .find_by_category(category)
            .await
            .map_err(question_store_internal)?;
        if questions.is_empty() {
            return Err(self.empty_category.error(category));
        }
        Ok(QuestionList::from(questions))
    }
}

#[async_trait]
impl<Q, C> QuestionsCommand for TriviaService<Q, C>
where
    Q: QuestionRepository,
    C: CategoryRepository,
{
    async fn add_question(&self, draft: QuestionDraft) -> Result<(), Error> {
        let question = NewQuestion::try_from_draft(draft).map_err(|missing| {
            Error::unprocessable(missing.to_string()).with_details(json!({ "field": missing.0 }))
        })?;
        let id = self.questions.insert(&question).await.map_err(|err| {
            warn!(error = %err, "question insert rolled back");
            Error::unprocessable(format!("question could not be stored: {err}"))
        })?;
        info!(question_id = %id, category = %question.category, "question created");
        Ok(())
    }

    async fn delete_question(&self, id: QuestionId) -> Result<(), Error> {
        // A record removed between lookup and delete reports `Ok(false)`.
        let outcome = match self.questions.find_by_id(id).await {
            Ok(Some(_)) => self.questions.delete(id).await,
            other => other.map(|_| false),
        };
        match outcome {
            Ok(true) => {
                info!(question_id = %id, "question deleted");
                Ok(())
            }
            Ok(false) => Err(Error::not_found(format!("question {id} does not exist"))),
            Err(err) => {
                warn!(question_id = %id, error = %err, "question delete rolled back");
                Err(Error::not_found(format!("question {id} could not be deleted")))
            }
        }
    }
}

#[async_trait]
impl<Q, C> QuizQuery for TriviaService<Q, C>
where
    Q: QuestionRepository,
    C: CategoryRepository,
{
    async fn next_question(&self, request: QuizRoundRequest) -> Result<QuizRound, Error> {
        let QuizRoundRequest {
            previous_questions,
            category,
        } = request;
        let pool = self
            .questions
            .find_candidates(&previous_questions, category.filter())
            .await
            .map_err(|err| Error::unprocessable(format!("quiz candidates unavailable: {err}")))?;

        let Some(question) = pick_uniform(&pool) else {
            debug!(asked = previous_questions.len(), "quiz pool exhausted");
            return Ok(QuizRound::Exhausted);
        };
        debug!(
            question_id = %question.id,
            pool = pool.len(),
            "quiz question drawn"
        );
        Ok(QuizRound::Next {
            previous_questions,
            question,
        })
    }
}

#[cfg(test)]
#[path = "trivia_service_tests.rs"]
mod tests;
