//! Trivia question entity and its validated constructors.
//!
//! Questions are created and deleted, never updated. The store assigns the
//! identifier, so creation goes through [`NewQuestion`] and only the store
//! produces a full [`Question`].

use std::fmt;

use serde::{Deserialize, Serialize};

use super::CategoryId;

/// Lowest accepted difficulty rating.
pub const DIFFICULTY_MIN: u8 = 1;
/// Highest accepted difficulty rating.
pub const DIFFICULTY_MAX: u8 = 5;

/// Validation errors returned by the question constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionValidationError {
    /// Question ids are positive.
    #[error("question id must be a positive integer, got {value}")]
    InvalidId {
        /// Rejected raw value.
        value: i64,
    },
    /// The question text was blank.
    #[error("question text must not be empty")]
    EmptyQuestion,
    /// The answer text was blank.
    #[error("answer text must not be empty")]
    EmptyAnswer,
    /// Difficulty outside the accepted rating range.
    #[error("difficulty must be between 1 and 5, got {value}")]
    InvalidDifficulty {
        /// Rejected raw value.
        value: i64,
    },
}

impl QuestionValidationError {
    /// Wire name of the field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidId { .. } => "id",
            Self::EmptyQuestion => "question",
            Self::EmptyAnswer => "answer",
            Self::InvalidDifficulty { .. } => "difficulty",
        }
    }
}

/// Store-assigned question identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i32")]
pub struct QuestionId(i32);

impl QuestionId {
    /// Validate and wrap a raw identifier.
    pub fn new(value: i64) -> Result<Self, QuestionValidationError> {
        i32::try_from(value)
            .ok()
            .filter(|id| *id > 0)
            .map(Self)
            .ok_or(QuestionValidationError::InvalidId { value })
    }

    /// Return the raw identifier.
    pub fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i64> for QuestionId {
    type Error = QuestionValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<QuestionId> for i32 {
    fn from(value: QuestionId) -> Self {
        value.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Difficulty rating of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i32")]
pub struct Difficulty(u8);

impl Difficulty {
    /// Validate a raw rating.
    pub fn new(value: i64) -> Result<Self, QuestionValidationError> {
        u8::try_from(value)
            .ok()
            .filter(|rating| (DIFFICULTY_MIN..=DIFFICULTY_MAX).contains(rating))
            .map(Self)
            .ok_or(QuestionValidationError::InvalidDifficulty { value })
    }

    /// Return the rating.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Difficulty {
    type Error = QuestionValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Difficulty> for i32 {
    fn from(value: Difficulty) -> Self {
        i32::from(value.0)
    }
}

fn non_blank(
    value: String,
    error: QuestionValidationError,
) -> Result<String, QuestionValidationError> {
    if value.trim().is_empty() {
        Err(error)
    } else {
        Ok(value)
    }
}

/// Validated payload for a question that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    question: String,
    answer: String,
    category: CategoryId,
    difficulty: Difficulty,
}

impl NewQuestion {
    /// Validate the text fields and assemble the payload.
    ///
    /// # Examples
    /// ```
    /// use trivia::domain::{CategoryId, Difficulty, NewQuestion};
    ///
    /// let draft = NewQuestion::new(
    ///     "What is the heaviest organ in the human body?",
    ///     "The Liver",
    ///     CategoryId::new(1).expect("valid category"),
    ///     Difficulty::new(4).expect("valid difficulty"),
    /// )
    /// .expect("valid question");
    /// assert_eq!(draft.answer(), "The Liver");
    /// ```
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: CategoryId,
        difficulty: Difficulty,
    ) -> Result<Self, QuestionValidationError> {
        Ok(Self {
            question: non_blank(question.into(), QuestionValidationError::EmptyQuestion)?,
            answer: non_blank(answer.into(), QuestionValidationError::EmptyAnswer)?,
            category,
            difficulty,
        })
    }

    /// Question text.
    pub fn question(&self) -> &str {
        self.question.as_str()
    }

    /// Answer text.
    pub fn answer(&self) -> &str {
        self.answer.as_str()
    }

    /// Owning category.
    pub fn category(&self) -> CategoryId {
        self.category
    }

    /// Difficulty rating.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Attach a store-assigned identifier.
    pub fn with_id(self, id: QuestionId) -> Question {
        let Self {
            question,
            answer,
            category,
            difficulty,
        } = self;
        Question {
            id,
            question,
            answer,
            category,
            difficulty,
        }
    }
}

/// A stored trivia question.
///
/// Serialised as `{"id", "question", "answer", "category", "difficulty"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionDraft", into = "QuestionDraft")]
pub struct Question {
    id: QuestionId,
    question: String,
    answer: String,
    category: CategoryId,
    difficulty: Difficulty,
}

/// Unvalidated question fields, used by adapters rebuilding stored rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: Difficulty,
}

impl Question {
    /// Validate a draft into a question.
    pub fn new(draft: QuestionDraft) -> Result<Self, QuestionValidationError> {
        let QuestionDraft {
            id,
            question,
            answer,
            category,
            difficulty,
        } = draft;
        Ok(NewQuestion::new(question, answer, category, difficulty)?.with_id(id))
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> QuestionId {
        self.id
    }

    /// Question text.
    pub fn question(&self) -> &str {
        self.question.as_str()
    }

    /// Answer text.
    pub fn answer(&self) -> &str {
        self.answer.as_str()
    }

    /// Owning category.
    pub fn category(&self) -> CategoryId {
        self.category
    }

    /// Difficulty rating.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl TryFrom<QuestionDraft> for Question {
    type Error = QuestionValidationError;

    fn try_from(value: QuestionDraft) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Question> for QuestionDraft {
    fn from(value: Question) -> Self {
        Self {
            id: value.id,
            question: value.question,
            answer: value.answer,
            category: value.category,
            difficulty: value.difficulty,
        }
    }
}
