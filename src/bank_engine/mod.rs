//! Core question bank engine — pagination, quiz selection, and the store
//! contract they are fed from.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | All shared types: ids, questions, categories, pages, quiz scope |
//! | `error`     | `BankError` failure taxonomy and the `BankResult` alias |
//! | `paginator` | Fixed-size page slicing with out-of-range vs empty distinction |
//! | `selector`  | Uniform random pick of an unseen question, exhaustion signal |
//! | `store`     | `QuestionStore` contract plus the in-memory `MemoryBank` |

pub mod error;
pub mod models;
pub mod paginator;
pub mod selector;
pub mod store;

// Re-export the public API surface so callers can use
// `bank_engine::paginate` without reaching into sub-modules.
pub use error::{BankError, BankResult};
pub use models::{Category, CategoryId, NewQuestion, Page, Question, QuestionId, QuizScope};
pub use paginator::{paginate, QUESTIONS_PER_PAGE};
pub use selector::{next_question, pick_unseen, QuizOutcome};
pub use store::{question_ids, MemoryBank, QuestionStore};
