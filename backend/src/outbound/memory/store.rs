//! Thread-safe in-memory implementation of the record store ports.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{
    CategoryRepository, CategoryRepositoryError, QuestionRepository, QuestionRepositoryError,
};
use crate::domain::question_query::matches_term;
use crate::domain::{
    Category, CategoryId, CategoryValidationError, DEFAULT_CATEGORY_LABELS, NewQuestion, Question,
    QuestionId,
};

const UNAVAILABLE: &str = "in-memory store marked unavailable";

#[derive(Debug, Default)]
struct StoreState {
    categories: BTreeMap<CategoryId, Category>,
    questions: BTreeMap<QuestionId, Question>,
    last_question_id: i64,
}

/// Record store holding categories and questions in memory.
///
/// Ids are assigned sequentially and never reused after a delete, matching
/// a database sequence. Reads come back in ascending id order.
#[derive(Debug, Default)]
pub struct InMemoryTriviaStore {
    state: RwLock<StoreState>,
    unavailable: AtomicBool,
}

impl InMemoryTriviaStore {
    /// Empty store with no categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the six default categories, ids 1 to 6.
    ///
    /// ```
    /// use trivia::outbound::memory::InMemoryTriviaStore;
    ///
    /// let store = InMemoryTriviaStore::with_default_categories();
    /// assert_eq!(store.category_count(), 6);
    /// ```
    pub fn with_default_categories() -> Self {
        let store = Self::new();
        store.seed_default_categories();
        store
    }

    /// Add the default categories if the store has none.
    ///
    /// Returns the number of categories added.
    pub fn seed_default_categories(&self) -> usize {
        let mut state = self.write();
        if !state.categories.is_empty() {
            return 0;
        }
        let seeded = DEFAULT_CATEGORY_LABELS
            .iter()
            .zip(1_i64..)
            .filter_map(|(label, id)| default_category(id, label).ok())
            .collect::<Vec<_>>();
        let count = seeded.len();
        state
            .categories
            .extend(seeded.into_iter().map(|category| (category.id(), category)));
        debug!(count, "seeded default categories");
        count
    }

    /// Insert or replace a category.
    pub fn put_category(&self, category: Category) {
        self.write().categories.insert(category.id(), category);
    }

    /// Number of stored categories.
    pub fn category_count(&self) -> usize {
        self.read().categories.len()
    }

    /// Number of stored questions.
    pub fn question_count(&self) -> usize {
        self.read().questions.len()
    }

    /// Make every port call fail with a connection error until reset.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn is_unavailable(&self) -> bool {
        self.unavailable.load(Ordering::SeqCst)
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn questions_where(
        &self,
        keep: impl Fn(&Question) -> bool,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        if self.is_unavailable() {
            return Err(QuestionRepositoryError::connection(UNAVAILABLE));
        }
        Ok(self
            .read()
            .questions
            .values()
            .filter(|question| keep(question))
            .cloned()
            .collect())
    }
}

fn default_category(id: i64, label: &str) -> Result<Category, CategoryValidationError> {
    Category::new(CategoryId::new(id)?, label)
}

#[async_trait]
impl CategoryRepository for InMemoryTriviaStore {
    async fn list_categories(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        if self.is_unavailable() {
            return Err(CategoryRepositoryError::connection(UNAVAILABLE));
        }
        Ok(self.read().categories.values().cloned().collect())
    }

    async fn find_category(
        &self,
        id: CategoryId,
    ) -> Result<Option<Category>, CategoryRepositoryError> {
        if self.is_unavailable() {
            return Err(CategoryRepositoryError::connection(UNAVAILABLE));
        }
        Ok(self.read().categories.get(&id).cloned())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryTriviaStore {
    async fn list_questions(&self) -> Result<Vec<Question>, QuestionRepositoryError> {
        self.questions_where(|_| true)
    }

    async fn find_question(
        &self,
        id: QuestionId,
    ) -> Result<Option<Question>, QuestionRepositoryError> {
        if self.is_unavailable() {
            return Err(QuestionRepositoryError::connection(UNAVAILABLE));
        }
        Ok(self.read().questions.get(&id).cloned())
    }

    async fn questions_by_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        self.questions_where(|question| question.category() == category_id)
    }

    async fn questions_matching(
        &self,
        term: &str,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        self.questions_where(|question| matches_term(question, term))
    }

    async fn insert_question(
        &self,
        question: &NewQuestion,
    ) -> Result<Question, QuestionRepositoryError> {
        if self.is_unavailable() {
            return Err(QuestionRepositoryError::connection(UNAVAILABLE));
        }
        let mut state = self.write();
        let category = question.category();
        if !state.categories.contains_key(&category) {
            return Err(QuestionRepositoryError::unknown_category(category.get()));
        }

        let next = state.last_question_id + 1;
        let id = QuestionId::new(next)
            .map_err(|err| QuestionRepositoryError::query(err.to_string()))?;
        let stored = question.clone().with_id(id);
        state.last_question_id = next;
        state.questions.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete_question(&self, id: QuestionId) -> Result<bool, QuestionRepositoryError> {
        if self.is_unavailable() {
            return Err(QuestionRepositoryError::connection(UNAVAILABLE));
        }
        Ok(self.write().questions.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::Difficulty;
    use rstest::{fixture, rstest};

    #[fixture]
    fn store() -> InMemoryTriviaStore {
        InMemoryTriviaStore::with_default_categories()
    }

    fn draft(text: &str, category: i64) -> NewQuestion {
        NewQuestion::new(
            text,
            "answer",
            CategoryId::new(category).expect("valid category"),
            Difficulty::new(2).expect("valid difficulty"),
        )
        .expect("valid question")
    }

    #[rstest]
    fn seeding_is_skipped_when_categories_exist(store: InMemoryTriviaStore) {
        assert_eq!(store.seed_default_categories(), 0);
        assert_eq!(store.category_count(), 6);
    }

    #[rstest]
    #[tokio::test]
    async fn default_categories_are_listed_in_id_order(store: InMemoryTriviaStore) {
        let labels: Vec<String> = store
            .list_categories()
            .await
            .expect("list categories")
            .iter()
            .map(|category| category.label().to_owned())
            .collect();
        assert_eq!(labels, DEFAULT_CATEGORY_LABELS);
    }

    #[rstest]
    #[tokio::test]
    async fn insert_assigns_sequential_ids_that_are_not_reused(store: InMemoryTriviaStore) {
        let first = store.insert_question(&draft("One?", 1)).await.expect("insert");
        let second = store.insert_question(&draft("Two?", 2)).await.expect("insert");
        assert!(store.delete_question(second.id()).await.expect("delete"));
        let third = store.insert_question(&draft("Three?", 3)).await.expect("insert");

        assert_eq!(first.id().get(), 1);
        assert_eq!(second.id().get(), 2);
        assert_eq!(third.id().get(), 3);
        assert_eq!(store.question_count(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn insert_rejects_unknown_category(store: InMemoryTriviaStore) {
        let err = store
            .insert_question(&draft("Orphan?", 40))
            .await
            .expect_err("unknown category");
        assert_eq!(err, QuestionRepositoryError::unknown_category(40));
        assert_eq!(store.question_count(), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn matching_is_case_insensitive_and_ordered(store: InMemoryTriviaStore) {
        for text in ["Title of the film?", "Who wrote it?", "Book TITLE?"] {
            store.insert_question(&draft(text, 5)).await.expect("insert");
        }

        let ids: Vec<i32> = store
            .questions_matching("title")
            .await
            .expect("search")
            .iter()
            .map(|question| question.id().get())
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[rstest]
    #[tokio::test]
    async fn matching_keeps_verbatim_greek_substrings(store: InMemoryTriviaStore) {
        store.insert_question(&draft("ΟΔΟΣ?", 3)).await.expect("insert");

        let found = store.questions_matching("Σ").await.expect("search");
        assert_eq!(found.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn find_question_tracks_insert_and_delete(store: InMemoryTriviaStore) {
        let created = store
            .insert_question(&draft("Where is the Louvre?", 2))
            .await
            .expect("insert");

        let found = store.find_question(created.id()).await.expect("find");
        assert_eq!(found, Some(created.clone()));

        assert!(store.delete_question(created.id()).await.expect("delete"));
        assert_eq!(store.find_question(created.id()).await.expect("find"), None);
    }

    #[rstest]
    #[tokio::test]
    async fn find_question_fails_while_unavailable(store: InMemoryTriviaStore) {
        store.set_unavailable(true);
        let id = QuestionId::new(1).expect("valid id");
        assert!(matches!(
            store.find_question(id).await,
            Err(QuestionRepositoryError::Connection { .. })
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn deleting_a_missing_question_reports_false(store: InMemoryTriviaStore) {
        let id = QuestionId::new(12).expect("valid id");
        assert!(!store.delete_question(id).await.expect("delete"));
    }

    #[rstest]
    #[tokio::test]
    async fn unavailable_store_fails_with_connection_errors(store: InMemoryTriviaStore) {
        store.set_unavailable(true);

        assert!(matches!(
            store.list_questions().await,
            Err(QuestionRepositoryError::Connection { .. })
        ));
        assert!(matches!(
            store.list_categories().await,
            Err(CategoryRepositoryError::Connection { .. })
        ));

        store.set_unavailable(false);
        assert!(store.list_questions().await.is_ok());
    }
}
