//! The fetch/filter/paginate/mutate pattern shared by every management
//! screen, written once.
//!
//! The held collection is a cache of the last successful fetch. Create and
//! update trigger a full re-fetch through the owning screen; delete and the
//! user-status toggle mutate locally through [`ListController::remove_where`]
//! and [`ListController::patch_where`]. Responses from superseded fetches are
//! discarded via a generation token, so a screen that re-fetches while an
//! older request is still in flight never shows stale data.

use leptos::prelude::*;

use crate::error::ApiError;

pub const PAGE_SIZE: usize = 5;

// =========================================================
// Pure core
// =========================================================

/// Case-insensitive substring match against any of the search keys.
pub fn matches(keys: &[String], term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    keys.iter().any(|key| key.to_lowercase().contains(&term))
}

pub fn total_pages(filtered_len: usize) -> usize {
    filtered_len.div_ceil(PAGE_SIZE)
}

/// Pages are 1-based; an empty collection still has a current page of 1.
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

pub fn page_slice<T: Clone>(items: &[T], page: usize) -> Vec<T> {
    let page = clamp_page(page, total_pages(items.len()));
    items
        .iter()
        .skip((page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .cloned()
        .collect()
}

// =========================================================
// Reactive wrapper
// =========================================================

/// Signal bundle instantiated once per screen. Copy, so view closures can
/// capture it freely.
pub struct ListController<T: Send + Sync + 'static> {
    items: RwSignal<Vec<T>>,
    search: RwSignal<String>,
    page: RwSignal<usize>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    seq: RwSignal<u64>,
    filtered: Memo<Vec<T>>,
}

impl<T: Send + Sync + 'static> Clone for ListController<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T: Send + Sync + 'static> Copy for ListController<T> {}

impl<T: Clone + PartialEq + Send + Sync + 'static> ListController<T> {
    /// `search_keys` designates the display field(s) the search box matches
    /// against.
    pub fn new(search_keys: fn(&T) -> Vec<String>) -> Self {
        let items = RwSignal::new(Vec::new());
        let search = RwSignal::new(String::new());
        let filtered = Memo::new(move |_| {
            let term = search.get();
            items.with(|all| {
                all.iter()
                    .filter(|item| matches(&search_keys(item), &term))
                    .cloned()
                    .collect::<Vec<_>>()
            })
        });

        Self {
            items,
            search,
            page: RwSignal::new(1),
            // loading until the first response, success or failure
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
            seq: RwSignal::new(0),
            filtered,
        }
    }

    // ---- fetch lifecycle ----

    /// Mark a fetch as started and return its generation token.
    pub fn begin_fetch(&self) -> u64 {
        self.loading.set(true);
        self.seq.update(|s| *s += 1);
        self.seq.get_untracked()
    }

    /// Apply a fetch outcome. A token from a superseded fetch is ignored.
    pub fn resolve(&self, seq: u64, result: Result<Vec<T>, ApiError>) {
        if seq != self.seq.get_untracked() {
            return;
        }
        match result {
            Ok(data) => {
                self.items.set(data);
                self.error.set(None);
            }
            Err(e) => self.error.set(Some(e.to_string())),
        }
        self.loading.set(false);
    }

    pub fn loading(&self) -> bool {
        self.loading.get()
    }

    pub fn error(&self) -> Option<String> {
        self.error.get()
    }

    // ---- search and pagination ----

    pub fn search_term(&self) -> String {
        self.search.get()
    }

    /// Changing the term resets to the first page.
    pub fn set_search(&self, term: String) {
        self.search.set(term);
        self.page.set(1);
    }

    pub fn pages(&self) -> usize {
        total_pages(self.filtered.with(|f| f.len()))
    }

    /// Clamped, so the indicator stays in range when the filtered set
    /// shrinks under the current page.
    pub fn page(&self) -> usize {
        clamp_page(self.page.get(), self.pages())
    }

    pub fn set_page(&self, page: usize) {
        self.page.set(clamp_page(page, self.pages()));
    }

    /// Index of the first visible row, for row numbering.
    pub fn offset(&self) -> usize {
        (self.page() - 1) * PAGE_SIZE
    }

    /// The rows of the current page of the filtered view.
    pub fn visible(&self) -> Vec<T> {
        self.filtered.with(|f| page_slice(f, self.page.get()))
    }

    pub fn is_empty(&self) -> bool {
        self.filtered.with(|f| f.is_empty())
    }

    /// Untracked snapshot of the raw collection, for checks inside event
    /// handlers (e.g. the author uniqueness check).
    pub fn all_untracked(&self) -> Vec<T> {
        self.items.get_untracked()
    }

    // ---- optimistic local mutations ----

    /// Optimistic delete: drop matching rows without re-fetching.
    pub fn remove_where(&self, pred: impl Fn(&T) -> bool) {
        self.items.update(|all| all.retain(|item| !pred(item)));
    }

    /// Optimistic in-place patch (user status toggle).
    pub fn patch_where(&self, pred: impl Fn(&T) -> bool, patch: impl Fn(&mut T)) {
        self.items.update(|all| {
            for item in all.iter_mut().filter(|item| pred(item)) {
                patch(item);
            }
        });
    }
}

#[cfg(test)]
mod tests;
