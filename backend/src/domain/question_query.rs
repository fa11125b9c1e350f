//! Question listing, search and category browsing over fetched sequences.
//!
//! Every function here is pure: it receives the sequence the store returned,
//! filters it, and cuts one page. The store may hand over a stale or already
//! filtered sequence; the functions re-apply their filter rather than trust
//! it, and never re-validate identities against the store.
//!
//! `total` on the resulting page always counts the filtered sequence before
//! pagination so clients can compute `ceil(total / page_size)` pages.

use pagination::{Page, PageIndex, PageSize};

use super::{Category, CategoryId, CategoryMap, Question};

/// One page of questions plus the context a listing response reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionListing {
    /// Page window and filtered total.
    pub page: Page<Question>,
    /// Full category mapping; present for the unscoped listing only.
    pub categories: Option<CategoryMap>,
    /// Category the listing is scoped to, `None` when unscoped.
    pub current_category: Option<CategoryId>,
}

/// Build the id→label mapping for a category sequence.
pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories.iter().collect()
}

/// Lowercase `text` one character at a time.
///
/// `str::to_lowercase` applies context rules such as the Greek final sigma,
/// which can stop a verbatim substring from matching; per-character folding
/// matches what `ILIKE` does.
fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Whether `question` contains `needle`, which must already be folded.
fn contains_folded(question: &Question, needle: &str) -> bool {
    needle.is_empty() || fold_case(question.question()).contains(needle)
}

/// Whether the question text contains `term`, ignoring case.
///
/// ```
/// # use trivia::domain::{CategoryId, Difficulty, NewQuestion, QuestionId};
/// use trivia::domain::question_query::matches_term;
///
/// let question = NewQuestion::new(
///     "What boxer's original name is Cassius Clay?",
///     "Muhammad Ali",
///     CategoryId::new(4).expect("valid category"),
///     Difficulty::new(1).expect("valid difficulty"),
/// )
/// .expect("valid question")
/// .with_id(QuestionId::new(9).expect("valid id"));
///
/// assert!(matches_term(&question, "cASSIUS"));
/// assert!(matches_term(&question, ""));
/// assert!(!matches_term(&question, "Ali"));
/// ```
pub fn matches_term(question: &Question, term: &str) -> bool {
    contains_folded(question, fold_case(term).as_str())
}

/// Page over every question, reporting the full category mapping.
pub fn list_all(
    questions: Vec<Question>,
    categories: &[Category],
    index: PageIndex,
    size: PageSize,
) -> QuestionListing {
    QuestionListing {
        page: Page::from_vec(questions, index, size),
        categories: Some(category_map(categories)),
        current_category: None,
    }
}

/// Page over the questions whose text contains `term`, ignoring case.
///
/// An empty term matches every question.
pub fn search(
    questions: Vec<Question>,
    term: &str,
    index: PageIndex,
    size: PageSize,
) -> QuestionListing {
    let needle = fold_case(term);
    let matching: Vec<Question> = questions
        .into_iter()
        .filter(|question| contains_folded(question, needle.as_str()))
        .collect();
    QuestionListing {
        page: Page::from_vec(matching, index, size),
        categories: None,
        current_category: None,
    }
}

/// Page over the questions belonging to `category`.
///
/// The caller has already established that `category` exists; an existing
/// category with no questions yields an empty page.
pub fn by_category(
    category: &Category,
    questions: Vec<Question>,
    index: PageIndex,
    size: PageSize,
) -> QuestionListing {
    let id = category.id();
    let scoped: Vec<Question> = questions
        .into_iter()
        .filter(|question| question.category() == id)
        .collect();
    QuestionListing {
        page: Page::from_vec(scoped, index, size),
        categories: None,
        current_category: Some(id),
    }
}

#[cfg(test)]
mod tests {
    //! Filtering and paging behaviour of the listing functions.
    use super::*;
    use crate::domain::test_fixtures::{category, question, questions_in};
    use rstest::rstest;

    fn page(value: usize) -> PageIndex {
        PageIndex::new(value).expect("non-zero page")
    }

    fn ids(listing: &QuestionListing) -> Vec<i32> {
        listing
            .page
            .items()
            .iter()
            .map(|question| question.id().get())
            .collect()
    }

    #[rstest]
    fn list_all_second_page_of_twelve_has_two_questions() {
        let questions = questions_in(1, 12);
        let categories = [category(1, "Science"), category(2, "Art")];

        let listing = list_all(questions, &categories, page(2), PageSize::default());

        assert_eq!(ids(&listing), vec![11, 12]);
        assert_eq!(listing.page.total(), 12);
        assert_eq!(listing.current_category, None);
        let map = listing.categories.expect("unscoped listing reports categories");
        assert_eq!(map.len(), 2);
    }

    #[rstest]
    fn list_all_beyond_last_page_is_empty() {
        let listing = list_all(questions_in(1, 3), &[], page(5), PageSize::default());
        assert!(listing.page.items().is_empty());
        assert_eq!(listing.page.total(), 3);
    }

    #[rstest]
    fn search_matches_case_insensitively_and_counts_matches() {
        let questions = vec![
            question(1, "What is the largest lake in Africa?", 3),
            question(2, "Which LAKE is the deepest?", 3),
            question(3, "Who painted the Mona Lisa?", 2),
        ];

        let listing = search(questions, "lake", PageIndex::FIRST, PageSize::default());

        assert_eq!(ids(&listing), vec![1, 2]);
        assert_eq!(listing.page.total(), 2);
        assert!(listing.categories.is_none());
        assert_eq!(listing.current_category, None);
    }

    #[rstest]
    fn search_with_empty_term_returns_every_question_across_pages() {
        let size = PageSize::new(4);
        let first = search(questions_in(1, 10), "", page(1), size);
        let second = search(questions_in(1, 10), "", page(2), size);
        let third = search(questions_in(1, 10), "", page(3), size);

        let mut seen = ids(&first);
        seen.extend(ids(&second));
        seen.extend(ids(&third));
        assert_eq!(seen, (1..=10).collect::<Vec<_>>());
        assert_eq!(first.page.total(), 10);
    }

    #[rstest]
    fn search_without_matches_is_an_empty_page() {
        let listing = search(
            questions_in(1, 5),
            "xylophone",
            PageIndex::FIRST,
            PageSize::default(),
        );
        assert!(listing.page.items().is_empty());
        assert_eq!(listing.page.total(), 0);
    }

    #[rstest]
    fn search_matches_non_ascii_case_folding() {
        let questions = vec![question(1, "Qui a peint L'ÉTÉ?", 2)];
        let listing = search(questions, "l'été", PageIndex::FIRST, PageSize::default());
        assert_eq!(ids(&listing), vec![1]);
    }

    #[rstest]
    #[case("ΟΔΟΣ", "Σ")]
    #[case("ΟΔΟΣ", "σ")]
    #[case("Ο ΔΡΟΜΟΣ ΤΗΣ ΠΟΛΗΣ", "ΟΣ Τ")]
    fn search_folds_each_character_independently(#[case] text: &str, #[case] term: &str) {
        let listing = search(
            vec![question(1, text, 1)],
            term,
            PageIndex::FIRST,
            PageSize::default(),
        );
        assert_eq!(listing.page.total(), 1);
        assert!(matches_term(&listing.page.items()[0], term));
    }

    #[rstest]
    fn by_category_filters_a_broader_sequence() {
        let mut questions = questions_in(1, 3);
        questions.extend(questions_in(2, 2));
        let art = category(2, "Art");

        let listing = by_category(&art, questions, PageIndex::FIRST, PageSize::default());

        assert_eq!(listing.page.total(), 2);
        assert!(
            listing
                .page
                .items()
                .iter()
                .all(|question| question.category() == art.id())
        );
        assert_eq!(listing.current_category, Some(art.id()));
    }

    #[rstest]
    fn by_category_with_no_questions_is_an_empty_page() {
        let sports = category(6, "Sports");
        let listing = by_category(
            &sports,
            questions_in(1, 4),
            PageIndex::FIRST,
            PageSize::default(),
        );
        assert!(listing.page.items().is_empty());
        assert_eq!(listing.page.total(), 0);
    }
}
