use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Identifier newtypes
// ---------------------------------------------------------------------------

/// Unique question identifier. Assigned once at insertion, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(pub u64);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// Category identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CategoryId(pub u32);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Bank entities
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub answer: String,
    pub category: CategoryId,
    /// Positive difficulty rating; validated at insertion.
    pub difficulty: u8,
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.id, self.text)
    }
}

/// Insertion payload. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub text: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: u8,
}

// ---------------------------------------------------------------------------
// Views and session scope
// ---------------------------------------------------------------------------

/// One page of questions, in the input collection's order.
///
/// A `Page` is a transient view, never persisted. Invariants:
/// `visible_count == items.len()` and `visible_count <= page_size`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub items: Vec<Question>,
    pub page: usize,
    pub page_size: usize,
    /// Size of the whole (pre-filtered) collection, not just this slice.
    pub total_count: usize,
    pub visible_count: usize,
}

/// Category scope of a quiz session. Session state (scope + seen ids) is
/// caller-held; the engine only consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizScope {
    All,
    Category(CategoryId),
}

impl fmt::Display for QuizScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizScope::All => write!(f, "all categories"),
            QuizScope::Category(id) => write!(f, "category {}", id),
        }
    }
}
