//! Search state machine
//!
//! All mutable UI state lives in one `SearchState`, updated only through
//! `Transition` values. Search completions carry the sequence number of the
//! request that produced them; completions older than the latest issued
//! request are discarded, so a slow stale response can never overwrite the
//! result of a newer search.

use crate::pipeline::{self, DerivedView};
use crate::types::{Book, SortKey};

/// The complete mutable state behind the search UI
#[derive(Debug, Clone)]
pub struct SearchState {
    /// Current search term (as last submitted)
    pub query: String,

    /// Active sort key
    pub sort_key: SortKey,

    /// Active language filter; "" means no filter
    pub language_filter: String,

    /// Current 1-indexed page
    pub page: usize,

    /// True while a search request is in flight
    pub loading: bool,

    /// True once any search has been submitted
    pub has_searched: bool,

    /// The full result set from the most recent successful search.
    /// Replaced wholesale, never appended to.
    pub all_books: Vec<Book>,

    /// Sequence number of the most recently issued search request
    latest_seq: u64,
}

/// A state update
#[derive(Debug, Clone)]
pub enum Transition {
    SetQuery(String),
    SetSort(SortKey),
    SetFilter(String),
    SetPage(usize),
    SearchStarted { seq: u64 },
    SearchSucceeded { seq: u64, books: Vec<Book> },
    SearchFailed { seq: u64 },
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            sort_key: SortKey::default(),
            language_filter: String::new(),
            page: 1,
            loading: false,
            has_searched: false,
            all_books: Vec::new(),
            latest_seq: 0,
        }
    }

    /// Issue the sequence number for the next search request
    pub fn next_seq(&mut self) -> u64 {
        self.latest_seq += 1;
        self.latest_seq
    }

    /// Sequence number of the most recently issued request
    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    /// Apply a transition
    ///
    /// Changing the sort key or filter resets the page to 1, as does a new
    /// result set. Stale search completions (seq older than the latest
    /// issued request) are discarded outright.
    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::SetQuery(query) => {
                self.query = query;
            }
            Transition::SetSort(key) => {
                self.sort_key = key;
                self.page = 1;
            }
            Transition::SetFilter(filter) => {
                self.language_filter = filter;
                self.page = 1;
            }
            Transition::SetPage(page) => {
                let filtered = pipeline::filter_by_language(&self.all_books, &self.language_filter);
                let last = pipeline::total_pages(filtered.len());
                self.page = page.clamp(1, last);
            }
            Transition::SearchStarted { seq } => {
                if seq < self.latest_seq {
                    return;
                }
                self.loading = true;
                self.has_searched = true;
            }
            Transition::SearchSucceeded { seq, books } => {
                if seq < self.latest_seq {
                    return;
                }
                self.all_books = books;
                self.page = 1;
                self.loading = false;
            }
            Transition::SearchFailed { seq } => {
                if seq < self.latest_seq {
                    return;
                }
                // Indistinguishable from zero matches, by policy
                self.all_books = Vec::new();
                self.page = 1;
                self.loading = false;
            }
        }
    }

    /// Run the pipeline over the current state
    pub fn derived(&self) -> DerivedView {
        pipeline::derive_view(&self.all_books, self.sort_key, &self.language_filter, self.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, languages: &[&str]) -> Book {
        Book {
            title: Some(title.to_string()),
            author_names: Vec::new(),
            first_publish_year: None,
            languages: languages.iter().map(|s| s.to_string()).collect(),
            cover_id: None,
            key: None,
        }
    }

    fn state_with_books(count: usize) -> SearchState {
        let mut state = SearchState::new();
        let seq = state.next_seq();
        state.apply(Transition::SearchStarted { seq });
        let books = (0..count).map(|i| book(&format!("B{:02}", i), &["eng"])).collect();
        state.apply(Transition::SearchSucceeded { seq, books });
        state
    }

    #[test]
    fn test_sort_change_resets_page() {
        let mut state = state_with_books(25);
        state.apply(Transition::SetPage(3));
        assert_eq!(state.page, 3);
        state.apply(Transition::SetSort(SortKey::Year));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut state = state_with_books(25);
        state.apply(Transition::SetPage(2));
        state.apply(Transition::SetFilter("fre".to_string()));
        assert_eq!(state.page, 1);
        assert_eq!(state.language_filter, "fre");
    }

    #[test]
    fn test_set_page_clamps_to_valid_range() {
        let mut state = state_with_books(25);
        state.apply(Transition::SetPage(99));
        assert_eq!(state.page, 3);
        state.apply(Transition::SetPage(0));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_success_replaces_result_set_wholesale() {
        let mut state = state_with_books(25);
        state.apply(Transition::SetPage(2));

        let seq = state.next_seq();
        state.apply(Transition::SearchStarted { seq });
        assert!(state.loading);
        state.apply(Transition::SearchSucceeded { seq, books: vec![book("Only", &[])] });

        assert_eq!(state.all_books.len(), 1);
        assert_eq!(state.page, 1);
        assert!(!state.loading);
    }

    #[test]
    fn test_failure_reads_as_zero_matches() {
        let mut state = state_with_books(5);
        let seq = state.next_seq();
        state.apply(Transition::SearchStarted { seq });
        state.apply(Transition::SearchFailed { seq });

        assert!(!state.loading);
        assert!(state.all_books.is_empty());
        let view = state.derived();
        assert!(view.books.is_empty());
        assert_eq!(view.total_pages, 1);
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut state = SearchState::new();

        let first = state.next_seq();
        state.apply(Transition::SearchStarted { seq: first });
        let second = state.next_seq();
        state.apply(Transition::SearchStarted { seq: second });

        // The older request resolves last; its books must not apply
        state.apply(Transition::SearchSucceeded {
            seq: second,
            books: vec![book("Newer", &[])],
        });
        state.apply(Transition::SearchSucceeded {
            seq: first,
            books: vec![book("Stale", &[])],
        });

        assert_eq!(state.all_books.len(), 1);
        assert_eq!(state.all_books[0].title.as_deref(), Some("Newer"));
    }

    #[test]
    fn test_stale_failure_does_not_clear_newer_results() {
        let mut state = SearchState::new();

        let first = state.next_seq();
        state.apply(Transition::SearchStarted { seq: first });
        let second = state.next_seq();
        state.apply(Transition::SearchStarted { seq: second });

        state.apply(Transition::SearchSucceeded {
            seq: second,
            books: vec![book("Kept", &[])],
        });
        state.apply(Transition::SearchFailed { seq: first });

        assert_eq!(state.all_books.len(), 1);
        assert!(!state.loading);
    }

    #[test]
    fn test_derived_recomputes_from_current_triple() {
        let mut state = SearchState::new();
        let seq = state.next_seq();
        state.apply(Transition::SearchStarted { seq });
        state.apply(Transition::SearchSucceeded {
            seq,
            books: vec![book("French", &["fre"]), book("English", &["eng"])],
        });

        state.apply(Transition::SetFilter("fre".to_string()));
        let view = state.derived();
        assert_eq!(view.books.len(), 1);
        assert_eq!(view.books[0].title.as_deref(), Some("French"));
    }
}
