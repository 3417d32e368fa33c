//! # quiz_bank_engine
//!
//! The selection and pagination core of a small trivia question bank.
//!
//! This library decides which subset of a question collection a caller
//! gets back: fixed-size pages for listings (with category filtering and
//! free-text search applied upstream by the store), and one unseen
//! question at a time, uniformly at random, for quiz sessions. It is the
//! engine behind a REST surface — transport encoding, routing, and
//! persistence all live with the caller.
//!
//! ## How it works
//!
//! 1. Fetch a collection from a [`QuestionStore`] — everything, one
//!    category, or the matches of a text search.
//! 2. Call [`paginate`] to slice it into a [`Page`] with total/visible
//!    counts, or hand the whole collection plus the session's seen-id set
//!    to [`pick_unseen`] / [`next_question`] for quiz mode.
//! 3. Quiz sessions are caller-held state: add each returned id to the
//!    seen-set and call again until [`QuizOutcome::Exhausted`].
//!
//! ## Key properties
//!
//! - **Pure**: both entry points are functions over their inputs — no
//!   ambient session state, no I/O, safe on any thread.
//! - **Distinguishable emptiness**: an empty collection pages to an empty
//!   [`Page`] (`total_count == 0`), while a page past the end of a
//!   non-empty collection is [`BankError::PageOutOfRange`].
//! - **Deterministic when seeded**: `rng_seed: Some(u64)` reproduces the
//!   exact quiz pick — useful for tests and replayable sessions.
//!
//! ## Quick start
//!
//! ```rust
//! use std::collections::HashSet;
//! use rand::{rngs::StdRng, SeedableRng};
//! use quiz_bank_engine::{
//!     paginate, pick_unseen, CategoryId, MemoryBank, NewQuestion,
//!     QuestionStore, QuizOutcome, QUESTIONS_PER_PAGE,
//! };
//!
//! let mut bank = MemoryBank::with_categories([(1, "Science"), (2, "Art")]);
//! bank.insert_question(NewQuestion {
//!     text: "What is the chemical symbol for gold?".into(),
//!     answer: "Au".into(),
//!     category: CategoryId(1),
//!     difficulty: 1,
//! }).unwrap();
//!
//! // Listing: page 1 of everything.
//! let page = paginate(&bank.list_all_questions(), 1, QUESTIONS_PER_PAGE).unwrap();
//! assert_eq!(page.visible_count, 1);
//! assert_eq!(page.total_count, 1);
//!
//! // Quiz: draw until the scope runs dry, feeding the seen-set back in.
//! let scope = bank.list_all_questions();
//! let mut seen = HashSet::new();
//! let mut rng = StdRng::seed_from_u64(7);
//! while let QuizOutcome::Question(q) = pick_unseen(&scope, &seen, &mut rng) {
//!     seen.insert(q.id);
//! }
//! assert_eq!(seen.len(), scope.len());
//! ```

pub mod bank_engine;

// Convenience re-exports so callers can use `quiz_bank_engine::paginate`
// directly without reaching into `bank_engine::`.
pub use bank_engine::{
    next_question, paginate, pick_unseen, question_ids, BankError, BankResult, Category,
    CategoryId, MemoryBank, NewQuestion, Page, Question, QuestionId, QuestionStore, QuizOutcome,
    QuizScope, QUESTIONS_PER_PAGE,
};
