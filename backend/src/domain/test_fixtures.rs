//! Shared builders for domain unit tests.

use super::{Category, CategoryId, Difficulty, NewQuestion, Question, QuestionId};

pub(crate) fn category_id(id: i64) -> CategoryId {
    CategoryId::new(id).expect("valid category id")
}

pub(crate) fn category(id: i64, label: &str) -> Category {
    Category::new(category_id(id), label).expect("valid category")
}

pub(crate) fn question(id: i64, text: &str, category: i64) -> Question {
    NewQuestion::new(
        text,
        format!("answer {id}"),
        category_id(category),
        Difficulty::new(1 + id % 5).expect("valid difficulty"),
    )
    .expect("valid question")
    .with_id(QuestionId::new(id).expect("valid question id"))
}

/// `count` questions in `category`, ids starting at `(category - 1) * 100 + 1`.
pub(crate) fn questions_in(category: i64, count: i64) -> Vec<Question> {
    let base = (category - 1) * 100;
    (1..=count)
        .map(|offset| {
            let id = base + offset;
            question(id, &format!("Question {id}?"), category)
        })
        .collect()
}
