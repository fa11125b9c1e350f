//! Quiz play: pick the next question a session has not seen yet.
//!
//! Play state lives entirely with the caller. Each turn the caller sends the
//! ids it has already been shown plus the category scope; the selector
//! computes the candidate set (in scope, not yet shown) and draws one member
//! uniformly at random. An empty candidate set is a successful
//! [`QuizOutcome::Exhausted`], not an error.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::{CategoryId, CategoryValidationError, Question, QuestionId};

/// Raw scope id the trivia client sends for "all categories".
pub const ALL_CATEGORIES_SCOPE_ID: i64 = 0;

/// Which questions a play session draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizScope {
    /// Every category.
    All,
    /// Exactly one category.
    Category(CategoryId),
}

impl QuizScope {
    /// Interpret the client's raw scope id, `0` meaning every category.
    ///
    /// ```
    /// use trivia::domain::quiz::QuizScope;
    ///
    /// assert_eq!(QuizScope::from_raw(0), Ok(QuizScope::All));
    /// assert!(matches!(QuizScope::from_raw(3), Ok(QuizScope::Category(_))));
    /// assert!(QuizScope::from_raw(-2).is_err());
    /// ```
    pub fn from_raw(id: i64) -> Result<Self, CategoryValidationError> {
        if id == ALL_CATEGORIES_SCOPE_ID {
            Ok(Self::All)
        } else {
            CategoryId::new(id).map(Self::Category)
        }
    }

    /// Whether `question` falls inside the scope.
    pub fn includes(self, question: &Question) -> bool {
        match self {
            Self::All => true,
            Self::Category(id) => question.category() == id,
        }
    }
}

/// Result of one selection turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    /// A question the session has not seen.
    Next {
        /// The drawn question.
        question: Question,
        /// Candidate-set size before this draw, the drawn question included.
        remaining: usize,
    },
    /// Every in-scope question has already been shown.
    Exhausted,
}

/// Questions in `scope` whose id is not in `previous`, in input order.
pub fn candidates<'a>(
    questions: &'a [Question],
    scope: QuizScope,
    previous: &HashSet<QuestionId>,
) -> Vec<&'a Question> {
    questions
        .iter()
        .filter(|question| scope.includes(question) && !previous.contains(&question.id()))
        .collect()
}

/// Draw the next question uniformly from the candidate set.
///
/// `previous` is only read; the caller accumulates it across turns.
///
/// ```
/// use std::collections::HashSet;
///
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use trivia::domain::quiz::{QuizOutcome, QuizScope, select_next};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let outcome = select_next(&[], QuizScope::All, &HashSet::new(), &mut rng);
/// assert_eq!(outcome, QuizOutcome::Exhausted);
/// ```
pub fn select_next<R>(
    questions: &[Question],
    scope: QuizScope,
    previous: &HashSet<QuestionId>,
    rng: &mut R,
) -> QuizOutcome
where
    R: Rng + ?Sized,
{
    let pool = candidates(questions, scope, previous);
    match pool.choose(rng) {
        Some(question) => QuizOutcome::Next {
            question: (*question).clone(),
            remaining: pool.len(),
        },
        None => QuizOutcome::Exhausted,
    }
}

/// Shared random source for quiz draws.
///
/// Production seeds from OS entropy; tests inject a fixed seed to assert
/// exact draws. The lock is held only for the synchronous draw.
#[derive(Debug)]
pub struct RandomSource {
    rng: Mutex<StdRng>,
}

impl RandomSource {
    /// Seed from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic source for reproducible draws.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Run `draw` with exclusive access to the generator.
    pub fn with_rng<T>(&self, draw: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut guard = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        draw(&mut *guard)
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}
