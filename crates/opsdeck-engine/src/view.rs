//! List view state
//!
//! Holds the query state of one list screen: search text, filter map, and
//! the current page. Mutators that change what matches (`set_search`,
//! `set_filter`) reset the page to 1 so the view never lands on a page that
//! no longer exists. Page navigation is bounds-checked against the current
//! filtered subset and silently refuses to step outside it.

use opsdeck_core::config::TABLE_PAGE_SIZE;

use crate::collection::Collection;
use crate::descriptor::Queryable;
use crate::predicate::{FilterMap, FilterValue, Predicate};
use crate::query::{paginate, Page};

#[derive(Debug, Clone)]
pub struct ListView {
    search: String,
    filters: FilterMap,
    page: usize,
    page_size: usize,
}

impl Default for ListView {
    fn default() -> Self {
        Self::new()
    }
}

impl ListView {
    pub fn new() -> Self {
        Self::with_page_size(TABLE_PAGE_SIZE)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            search: String::new(),
            filters: FilterMap::new(),
            page: 1,
            page_size,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filter(&self, key: &str) -> FilterValue {
        self.filters
            .get(key)
            .cloned()
            .unwrap_or(FilterValue::Any)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Replace the search text and jump back to the first page.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// Set one filter dimension and jump back to the first page.
    /// [`FilterValue::Any`] clears the dimension.
    pub fn set_filter(&mut self, key: impl Into<String>, value: FilterValue) {
        let key = key.into();
        if value.is_any() {
            self.filters.remove(&key);
        } else {
            self.filters.insert(key, value);
        }
        self.page = 1;
    }

    fn predicate(&self) -> Predicate {
        Predicate::new(&self.search, &self.filters)
    }

    /// Compute the currently visible page of `collection`.
    pub fn visible<E: Queryable>(&self, collection: &Collection<E>) -> Page<E> {
        paginate(collection, &self.predicate(), self.page, self.page_size)
    }

    /// Jump to `page` if it lies within `[1, total_pages]` for the current
    /// query; out-of-range requests are ignored.
    pub fn go_to<E: Queryable>(&mut self, collection: &Collection<E>, page: usize) {
        let total_pages =
            paginate(collection, &self.predicate(), 1, self.page_size).total_pages;
        if page >= 1 && page <= total_pages {
            self.page = page;
        }
    }

    pub fn next_page<E: Queryable>(&mut self, collection: &Collection<E>) {
        self.go_to(collection, self.page + 1);
    }

    pub fn previous_page<E: Queryable>(&mut self, collection: &Collection<E>) {
        if self.page > 1 {
            self.go_to(collection, self.page - 1);
        }
    }
}
