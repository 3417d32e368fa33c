//! Question/category store: the contract the engine is fed from, plus an
//! in-memory implementation.
//!
//! The Paginator and Selector never query the store themselves — callers
//! fetch a collection here (all, by category, or by search) and hand it
//! over. Listing order is insertion order, which is the stable order the
//! Paginator relies on for reproducible pages.

use std::collections::HashSet;

use tracing::debug;

use crate::bank_engine::error::{BankError, BankResult};
use crate::bank_engine::models::{
    Category, CategoryId, NewQuestion, Question, QuestionId, QuizScope,
};

/// Contract of the question/category repository the engine consumes.
///
/// Deletion is strict: removing an id that is not present reports
/// [`BankError::QuestionNotFound`] rather than silently succeeding, so
/// callers can tell the two outcomes apart. A successful delete removes
/// the question from every future listing — no tombstones.
pub trait QuestionStore {
    /// All questions, in insertion order.
    fn list_all_questions(&self) -> Vec<Question>;

    /// Questions of one category, in insertion order. Unknown category
    /// ids are reported, not treated as an empty match.
    fn list_questions_by_category(&self, category: CategoryId) -> BankResult<Vec<Question>>;

    /// Case-insensitive substring match on question text. Zero matches is
    /// a valid empty result; an empty term is rejected.
    fn search_questions(&self, term: &str) -> BankResult<Vec<Question>>;

    fn list_categories(&self) -> Vec<Category>;

    fn get_category(&self, category: CategoryId) -> BankResult<Category>;

    /// Insert a question, returning its freshly assigned id. Validates
    /// difficulty and category before storing anything.
    fn insert_question(&mut self, new: NewQuestion) -> BankResult<QuestionId>;

    /// Remove a question. `QuestionNotFound` if no such id exists.
    fn delete_question(&mut self, id: QuestionId) -> BankResult<()>;

    /// The question collection backing a quiz session's scope.
    fn scope_questions(&self, scope: QuizScope) -> BankResult<Vec<Question>> {
        match scope {
            QuizScope::All => Ok(self.list_all_questions()),
            QuizScope::Category(id) => self.list_questions_by_category(id),
        }
    }
}

/// In-memory question bank.
///
/// Questions live in an insertion-ordered `Vec`; ids come from a
/// monotonic counter and are never reused after deletion, so seen-sets
/// held by live quiz sessions stay unambiguous. The category catalogue is
/// fixed at construction (categories are read-only to this engine).
#[derive(Debug, Clone)]
pub struct MemoryBank {
    questions: Vec<Question>,
    categories: Vec<Category>,
    next_id: u64,
}

impl MemoryBank {
    pub fn new(categories: Vec<Category>) -> Self {
        MemoryBank {
            questions: Vec::new(),
            categories,
            next_id: 1,
        }
    }

    /// Build a bank from `(id, name)` pairs, for tests and demos.
    pub fn with_categories<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u32, S)>,
        S: Into<String>,
    {
        let categories = pairs
            .into_iter()
            .map(|(id, name)| Category {
                id: CategoryId(id),
                name: name.into(),
            })
            .collect();
        MemoryBank::new(categories)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    fn has_category(&self, id: CategoryId) -> bool {
        self.categories.iter().any(|c| c.id == id)
    }
}

impl QuestionStore for MemoryBank {
    fn list_all_questions(&self) -> Vec<Question> {
        self.questions.clone()
    }

    fn list_questions_by_category(&self, category: CategoryId) -> BankResult<Vec<Question>> {
        if !self.has_category(category) {
            return Err(BankError::CategoryNotFound(category));
        }
        Ok(self
            .questions
            .iter()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    fn search_questions(&self, term: &str) -> BankResult<Vec<Question>> {
        if term.trim().is_empty() {
            return Err(BankError::EmptySearchTerm);
        }
        let needle = term.to_lowercase();
        let hits: Vec<Question> = self
            .questions
            .iter()
            .filter(|q| q.text.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        debug!(term, hits = hits.len(), "question search");
        Ok(hits)
    }

    fn list_categories(&self) -> Vec<Category> {
        self.categories.clone()
    }

    fn get_category(&self, category: CategoryId) -> BankResult<Category> {
        self.categories
            .iter()
            .find(|c| c.id == category)
            .cloned()
            .ok_or(BankError::CategoryNotFound(category))
    }

    fn insert_question(&mut self, new: NewQuestion) -> BankResult<QuestionId> {
        if new.difficulty == 0 {
            return Err(BankError::InvalidDifficulty { given: new.difficulty });
        }
        if !self.has_category(new.category) {
            return Err(BankError::CategoryNotFound(new.category));
        }

        let id = QuestionId(self.next_id);
        self.next_id += 1;
        self.questions.push(Question {
            id,
            text: new.text,
            answer: new.answer,
            category: new.category,
            difficulty: new.difficulty,
        });
        debug!(id = %id, total = self.questions.len(), "inserted question");
        Ok(id)
    }

    fn delete_question(&mut self, id: QuestionId) -> BankResult<()> {
        let pos = self
            .questions
            .iter()
            .position(|q| q.id == id)
            .ok_or(BankError::QuestionNotFound(id))?;
        // Single Vec::remove keeps the delete atomic from a reader's
        // viewpoint and preserves insertion order of the rest.
        self.questions.remove(pos);
        debug!(id = %id, total = self.questions.len(), "deleted question");
        Ok(())
    }
}

/// Collect the ids of a question collection, e.g. to diff against a
/// quiz session's seen-set.
pub fn question_ids(questions: &[Question]) -> HashSet<QuestionId> {
    questions.iter().map(|q| q.id).collect()
}
