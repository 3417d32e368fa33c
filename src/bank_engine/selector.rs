//! Quiz selection: one unseen question at a time, uniformly at random.
//!
//! The selector is stateless. Every call recomputes the candidate set
//! from the full scope and the caller-supplied seen-set, so a quiz
//! session can be resumed or restarted from any point just by replaying
//! its seen ids. The session state machine lives entirely with the
//! caller: `Active` while candidates remain, `Exhausted` once the scope
//! is used up (terminal for that scope; a fresh scope starts fresh
//! because both inputs are supplied fresh).

use std::collections::HashSet;

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use crate::bank_engine::models::{Question, QuestionId};

/// Result of asking for the next quiz question.
///
/// `Exhausted` is a terminal signal, not an error: every question in the
/// scope has been served and the caller should end the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    Question(Question),
    Exhausted,
}

impl QuizOutcome {
    /// The picked question, if any.
    pub fn question(self) -> Option<Question> {
        match self {
            QuizOutcome::Question(q) => Some(q),
            QuizOutcome::Exhausted => None,
        }
    }
}

/// Pick one unseen question from `scope_questions`, uniformly at random.
///
/// Candidates are the scope questions whose id is not in `seen_ids`;
/// each has equal selection probability on every call.
pub fn pick_unseen<R: Rng>(
    scope_questions: &[Question],
    seen_ids: &HashSet<QuestionId>,
    rng: &mut R,
) -> QuizOutcome {
    let candidates: Vec<&Question> = scope_questions
        .iter()
        .filter(|q| !seen_ids.contains(&q.id))
        .collect();

    if candidates.is_empty() {
        debug!(scope = scope_questions.len(), seen = seen_ids.len(), "quiz scope exhausted");
        return QuizOutcome::Exhausted;
    }

    let idx = rng.gen_range(0..candidates.len());
    let picked = candidates[idx].clone();
    debug!(candidates = candidates.len(), picked = %picked.id, "picked quiz question");
    QuizOutcome::Question(picked)
}

/// [`pick_unseen`] with the engine's standard seed handling: `Some(seed)`
/// gives a reproducible pick, `None` draws from entropy.
pub fn next_question(
    scope_questions: &[Question],
    seen_ids: &HashSet<QuestionId>,
    rng_seed: Option<u64>,
) -> QuizOutcome {
    let mut rng: StdRng = match rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    pick_unseen(scope_questions, seen_ids, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank_engine::models::CategoryId;

    fn q(id: u64) -> Question {
        Question {
            id: QuestionId(id),
            text: format!("question {id}"),
            answer: format!("answer {id}"),
            category: CategoryId(1),
            difficulty: 1,
        }
    }

    #[test]
    fn same_seed_picks_same_question() {
        let scope: Vec<Question> = (1..=8).map(q).collect();
        let seen = HashSet::new();
        let a = next_question(&scope, &seen, Some(42));
        let b = next_question(&scope, &seen, Some(42));
        assert_eq!(a, b);
    }

    #[test]
    fn empty_scope_is_immediately_exhausted() {
        let seen = HashSet::new();
        assert_eq!(next_question(&[], &seen, Some(1)), QuizOutcome::Exhausted);
    }
}
