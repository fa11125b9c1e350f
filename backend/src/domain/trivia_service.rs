//! Trivia domain services.
//!
//! These services implement the trivia driving ports by reading the record
//! store through its driven ports and handing the fetched sequences to the
//! pure functions in [`crate::domain::question_query`].

use std::sync::Arc;

use async_trait::async_trait;
use pagination::PageSize;
use serde_json::json;
use tracing::{debug, warn};

use crate::domain::ports::{
    CategoryQuestionsRequest, CategoryRepository, CategoryRepositoryError, ListQuestionsRequest,
    QuestionRepository, QuestionRepositoryError, SearchQuestionsRequest, TriviaCommand,
    TriviaQuery,
};
use crate::domain::question_query::{self, QuestionListing};
use crate::domain::{CategoryMap, Error, NewQuestion, Question, QuestionId};

pub(crate) fn map_question_error(error: QuestionRepositoryError) -> Error {
    match error {
        QuestionRepositoryError::Connection { message } => {
            warn!(%message, "question repository unavailable");
            Error::service_unavailable(format!("question repository unavailable: {message}"))
        }
        QuestionRepositoryError::Query { message } => {
            warn!(%message, "question repository query failed");
            Error::internal(format!("question repository error: {message}"))
        }
        QuestionRepositoryError::UnknownCategory { category_id } => {
            Error::invalid_request(format!("category {category_id} does not exist"))
                .with_details(json!({ "field": "category", "code": "unknown_category" }))
        }
    }
}

pub(crate) fn map_category_error(error: CategoryRepositoryError) -> Error {
    match error {
        CategoryRepositoryError::Connection { message } => {
            warn!(%message, "category repository unavailable");
            Error::service_unavailable(format!("category repository unavailable: {message}"))
        }
        CategoryRepositoryError::Query { message } => {
            warn!(%message, "category repository query failed");
            Error::internal(format!("category repository error: {message}"))
        }
    }
}

/// Trivia service implementing the read driving port.
#[derive(Clone)]
pub struct TriviaQueryService<Q, C> {
    questions: Arc<Q>,
    categories: Arc<C>,
    page_size: PageSize,
}

impl<Q, C> TriviaQueryService<Q, C> {
    /// Create a query service paging with [`PageSize::default`].
    pub fn new(questions: Arc<Q>, categories: Arc<C>) -> Self {
        Self {
            questions,
            categories,
            page_size: PageSize::default(),
        }
    }

    /// Override the page size, mainly so tests can use small pages.
    #[must_use]
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }
}

#[async_trait]
impl<Q, C> TriviaQuery for TriviaQueryService<Q, C>
where
    Q: QuestionRepository,
    C: CategoryRepository,
{
    async fn list_categories(&self) -> Result<CategoryMap, Error> {
        let categories = self
            .categories
            .list_categories()
            .await
            .map_err(map_category_error)?;
        Ok(question_query::category_map(&categories))
    }

    async fn list_questions(
        &self,
        request: ListQuestionsRequest,
    ) -> Result<QuestionListing, Error> {
        let categories = self
            .categories
            .list_categories()
            .await
            .map_err(map_category_error)?;
        let questions = self
            .questions
            .list_questions()
            .await
            .map_err(map_question_error)?;
        Ok(question_query::list_all(
            questions,
            &categories,
            request.page,
            self.page_size,
        ))
    }

    async fn search_questions(
        &self,
        request: SearchQuestionsRequest,
    ) -> Result<QuestionListing, Error> {
        let SearchQuestionsRequest { term, page } = request;
        let matching = self
            .questions
            .questions_matching(&term)
            .await
            .map_err(map_question_error)?;
        debug!(term = %term, matches = matching.len(), "searched questions");
        Ok(question_query::search(matching, &term, page, self.page_size))
    }

    async fn questions_by_category(
        &self,
        request: CategoryQuestionsRequest,
    ) -> Result<QuestionListing, Error> {
        let category = self
            .categories
            .find_category(request.category_id)
            .await
            .map_err(map_category_error)?
            .ok_or_else(|| Error::not_found(format!("category {} not found", request.category_id)))?;
        let questions = self
            .questions
            .questions_by_category(category.id())
            .await
            .map_err(map_question_error)?;
        Ok(question_query::by_category(
            &category,
            questions,
            request.page,
            self.page_size,
        ))
    }
}

/// Trivia service implementing the mutation driving port.
#[derive(Clone)]
pub struct TriviaCommandService<Q> {
    questions: Arc<Q>,
}

impl<Q> TriviaCommandService<Q> {
    /// Create a command service over the question repository.
    pub fn new(questions: Arc<Q>) -> Self {
        Self { questions }
    }
}

#[async_trait]
impl<Q> TriviaCommand for TriviaCommandService<Q>
where
    Q: QuestionRepository,
{
    async fn create_question(&self, question: NewQuestion) -> Result<Question, Error> {
        let stored = self
            .questions
            .insert_question(&question)
            .await
            .map_err(map_question_error)?;
        debug!(id = %stored.id(), category = %stored.category(), "question created");
        Ok(stored)
    }

    async fn delete_question(&self, id: QuestionId) -> Result<QuestionId, Error> {
        let removed = self
            .questions
            .delete_question(id)
            .await
            .map_err(map_question_error)?;
        if !removed {
            return Err(Error::not_found(format!("question {id} not found")));
        }
        debug!(%id, "question deleted");
        Ok(id)
    }
}

#[cfg(test)]
#[path = "trivia_service_tests.rs"]
mod tests;
