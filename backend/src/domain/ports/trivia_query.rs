//! Driving port for trivia read operations.
//!
//! Inbound adapters use this port to list categories and page through
//! questions without depending on repository details.

use async_trait::async_trait;
use pagination::{Page, PageIndex, PageSize};

use crate::domain::question_query::QuestionListing;
use crate::domain::{CategoryId, CategoryMap, Error};

/// Request for one page of every question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuestionsRequest {
    pub page: PageIndex,
}

/// Request for one page of questions matching a search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuestionsRequest {
    /// Matched as a case-insensitive substring of the question text.
    pub term: String,
    pub page: PageIndex,
}

/// Request for one page of a single category's questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryQuestionsRequest {
    pub category_id: CategoryId,
    pub page: PageIndex,
}

/// Driving port for trivia read operations.
///
/// # Examples
///
/// ```rust,no_run
/// # async fn example() -> Result<(), trivia::domain::Error> {
/// use trivia::domain::ports::{FixtureTriviaQuery, ListQuestionsRequest, TriviaQuery};
///
/// let listing = FixtureTriviaQuery
///     .list_questions(ListQuestionsRequest { page: Default::default() })
///     .await?;
/// assert_eq!(listing.page.total(), 0);
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TriviaQuery: Send + Sync {
    /// Every category as an ordered id to label mapping.
    async fn list_categories(&self) -> Result<CategoryMap, Error>;

    /// One page of every question plus the category mapping.
    async fn list_questions(&self, request: ListQuestionsRequest)
    -> Result<QuestionListing, Error>;

    /// One page of the questions whose text contains the term.
    async fn search_questions(
        &self,
        request: SearchQuestionsRequest,
    ) -> Result<QuestionListing, Error>;

    /// One page of a category's questions.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] when the category
    /// does not exist.
    async fn questions_by_category(
        &self,
        request: CategoryQuestionsRequest,
    ) -> Result<QuestionListing, Error>;
}

/// Fixture query implementation for tests that do not need a store.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTriviaQuery;

fn empty_listing(page: PageIndex) -> QuestionListing {
    QuestionListing {
        page: Page::from_vec(Vec::new(), page, PageSize::default()),
        categories: None,
        current_category: None,
    }
}

#[async_trait]
impl TriviaQuery for FixtureTriviaQuery {
    async fn list_categories(&self) -> Result<CategoryMap, Error> {
        Ok(CategoryMap::default())
    }

    async fn list_questions(
        &self,
        request: ListQuestionsRequest,
    ) -> Result<QuestionListing, Error> {
        Ok(QuestionListing {
            categories: Some(CategoryMap::default()),
            ..empty_listing(request.page)
        })
    }

    async fn search_questions(
        &self,
        request: SearchQuestionsRequest,
    ) -> Result<QuestionListing, Error> {
        Ok(empty_listing(request.page))
    }

    async fn questions_by_category(
        &self,
        request: CategoryQuestionsRequest,
    ) -> Result<QuestionListing, Error> {
        Err(Error::not_found(format!(
            "category {} not found",
            request.category_id
        )))
    }
}
