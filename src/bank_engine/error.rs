use thiserror::Error;

use crate::bank_engine::models::{CategoryId, QuestionId};

/// Failure kinds surfaced by the engine and the question store.
///
/// These are kinds, not transport codes: mapping to HTTP statuses (404,
/// 422, ...) is the caller's job. Quiz exhaustion is deliberately NOT
/// here — it is the terminal arm of [`QuizOutcome`](crate::QuizOutcome),
/// not a failure.
///
/// "Empty because nothing matches" is a success (`Page` with
/// `total_count == 0`, or an empty search result), never an error, so the
/// two remain distinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    /// Requested page is past the end of a non-empty collection.
    /// Recoverable: clamp to `last_page` or report "no more pages".
    #[error("page {page} is out of range: {total_count} question(s) fill only {last_page} page(s)")]
    PageOutOfRange {
        page: usize,
        total_count: usize,
        last_page: usize,
    },

    /// No question with this id exists in the store.
    #[error("question {0} not found")]
    QuestionNotFound(QuestionId),

    /// No category with this id exists in the store.
    #[error("category {0} not found")]
    CategoryNotFound(CategoryId),

    /// Page and page size must both be positive. Rejected before any
    /// store access.
    #[error("invalid page request: page={page}, page_size={page_size} (both must be >= 1)")]
    InvalidPageRequest { page: usize, page_size: usize },

    /// Empty or whitespace-only search terms are rejected rather than
    /// treated as "match all".
    #[error("search term must not be empty")]
    EmptySearchTerm,

    /// Question difficulty must be a positive integer.
    #[error("difficulty must be >= 1 (got {given})")]
    InvalidDifficulty { given: u8 },
}

/// Engine result type.
pub type BankResult<T> = Result<T, BankError>;
