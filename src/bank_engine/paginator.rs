//! Fixed-size pagination over an ordered question collection.
//!
//! The Paginator only slices: category filtering and text search happen in
//! the store before the collection reaches [`paginate`], and the input
//! order is preserved as-is. Pages are deterministic whenever the input
//! has a stable order (the in-memory store uses insertion order).
//!
//! Two "nothing to show" cases are kept distinct on purpose:
//!
//! - empty input collection → an empty [`Page`] with `total_count == 0`
//!   (a valid "nothing matches" result);
//! - page past the end of a non-empty collection →
//!   [`BankError::PageOutOfRange`].

use tracing::debug;

use crate::bank_engine::error::{BankError, BankResult};
use crate::bank_engine::models::{Page, Question};

/// Default page size, matching the listing surface this engine backs.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Slice `questions` into its `page`-th fixed-size page (1-based).
///
/// Rejects `page == 0` or `page_size == 0` before touching the input.
pub fn paginate(questions: &[Question], page: usize, page_size: usize) -> BankResult<Page> {
    if page == 0 || page_size == 0 {
        return Err(BankError::InvalidPageRequest { page, page_size });
    }

    let total_count = questions.len();
    if total_count == 0 {
        return Ok(Page {
            items: Vec::new(),
            page,
            page_size,
            total_count: 0,
            visible_count: 0,
        });
    }

    // saturating_mul: an absurdly large page lands in the out-of-range
    // arm instead of overflowing.
    let start = (page - 1).saturating_mul(page_size);
    if start >= total_count {
        let last_page = total_count.div_ceil(page_size);
        return Err(BankError::PageOutOfRange {
            page,
            total_count,
            last_page,
        });
    }

    let end = (start + page_size).min(total_count);
    let items = questions[start..end].to_vec();
    debug!(page, page_size, total_count, visible = items.len(), "serving question page");

    Ok(Page {
        visible_count: items.len(),
        items,
        page,
        page_size,
        total_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank_engine::models::{CategoryId, QuestionId};

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
    fn slices_in_input_order() {
        let qs: Vec<Question> = (1..=7).map(q).collect();
        let page = paginate(&qs, 2, 3).unwrap();
        let ids: Vec<u64> = page.items.iter().map(|x| x.id.0).collect();
        assert_eq!(ids, vec![4, 5, 6]);
        assert_eq!(page.total_count, 7);
        assert_eq!(page.visible_count, 3);
    }

    #[test]
    fn last_page_may_be_short() {
        let qs: Vec<Question> = (1..=7).map(q).collect();
        let page = paginate(&qs, 3, 3).unwrap();
        assert_eq!(page.visible_count, 1);
        assert_eq!(page.items[0].id, QuestionId(7));
    }

    #[test]
    fn huge_page_number_does_not_overflow() {
        let qs: Vec<Question> = (1..=3).map(q).collect();
        let err = paginate(&qs, usize::MAX, usize::MAX).unwrap_err();
        assert!(matches!(err, BankError::PageOutOfRange { .. }));
    }
}
