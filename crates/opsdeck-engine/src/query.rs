//! Collection query engine
//!
//! Filters a collection through a [`Predicate`] (stable order preserved),
//! then slices out one 1-indexed page. Total pure function: it cannot fail,
//! and zero matches is a valid empty page, not an error.
//!
//! Contract the view layer must uphold: the engine does not clamp `page`
//! against `total_pages`. Callers reset the page to 1 whenever search or
//! filters change (see [`crate::view::ListView`]); an out-of-range page
//! yields an empty `items` slice.

use std::sync::Arc;

use crate::collection::Collection;
use crate::descriptor::Queryable;
use crate::predicate::Predicate;

/// One visible page of a filtered collection.
#[derive(Debug, Clone)]
pub struct Page<E> {
    pub items: Vec<Arc<E>>,
    /// Entities matching the predicate across all pages.
    pub total_matched: usize,
    /// `ceil(total_matched / page_size)`; 0 means "no pages", a valid state.
    pub total_pages: usize,
    /// 1-based inclusive display index of the first row, 0 when empty.
    pub start_display: usize,
    /// 1-based inclusive display index of the last row, 0 when empty.
    pub end_display: usize,
}

impl<E> Page<E> {
    /// "Showing 1 to 5 of 8" label; views append the entity noun.
    pub fn range_label(&self) -> String {
        format!(
            "Showing {} to {} of {}",
            self.start_display, self.end_display, self.total_matched
        )
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Filter `collection` through `predicate`, then slice page `page` of size
/// `page_size`. `page` is 1-indexed; `page_size` must be non-zero.
pub fn paginate<E: Queryable>(
    collection: &Collection<E>,
    predicate: &Predicate,
    page: usize,
    page_size: usize,
) -> Page<E> {
    debug_assert!(page >= 1, "pages are 1-indexed");
    debug_assert!(page_size >= 1, "page_size must be non-zero");

    let matched: Vec<Arc<E>> = collection
        .iter()
        .filter(|entity| predicate.matches(entity.as_ref()))
        .cloned()
        .collect();

    let total_matched = matched.len();
    let total_pages = total_matched.div_ceil(page_size);

    let start = (page.max(1) - 1) * page_size;
    let items: Vec<Arc<E>> = matched
        .into_iter()
        .skip(start)
        .take(page_size)
        .collect();

    let start_display = if items.is_empty() { 0 } else { start + 1 };
    let end_display = if items.is_empty() {
        0
    } else {
        (start + items.len()).min(total_matched)
    };

    Page {
        items,
        total_matched,
        total_pages,
        start_display,
        end_display,
    }
}
