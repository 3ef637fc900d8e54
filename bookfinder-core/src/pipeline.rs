//! The filter → sort → paginate pipeline
//!
//! Pure and synchronous: given the full result set and the current
//! (sort key, language filter, page) selection, produce the page of records
//! to render. Source records are never mutated, only selected, reordered,
//! and sliced.

use crate::types::{Book, SortKey};
use serde::Serialize;

/// Records shown per page
pub const PAGE_SIZE: usize = 12;

/// The filtered, sorted, paginated view of a result set
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DerivedView {
    /// The records on the requested page
    pub books: Vec<Book>,

    /// Count of records matching the filter, across all pages
    pub total_matches: usize,

    /// ceil(total_matches / PAGE_SIZE), never less than 1
    pub total_pages: usize,

    /// The 1-indexed page this view shows
    pub page: usize,
}

/// Keep books matching the language filter
///
/// An empty filter keeps everything, in order. With a filter active, books
/// whose language list is absent are excluded.
pub fn filter_by_language<'a>(books: &'a [Book], filter: &str) -> Vec<&'a Book> {
    books
        .iter()
        .filter(|book| filter.is_empty() || book.languages.iter().any(|code| code == filter))
        .collect()
}

/// Stable sort by the selected key; ties keep encounter order
pub fn sort_books(books: &mut [&Book], key: SortKey) {
    match key {
        SortKey::Title => books.sort_by(|a, b| a.title_or_empty().cmp(b.title_or_empty())),
        SortKey::Year => books.sort_by(|a, b| {
            a.first_publish_year
                .unwrap_or(0)
                .cmp(&b.first_publish_year.unwrap_or(0))
        }),
        SortKey::Language => books.sort_by(|a, b| a.primary_language().cmp(b.primary_language())),
    }
}

/// Page count for a filtered result set (an empty set still has one page)
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE).max(1)
}

/// Run the full pipeline over a result set
///
/// `page` is 1-indexed; 0 is treated as 1. A page past the end yields an
/// empty slice while `total_pages` still reports the real count, so callers
/// can clamp and retry.
pub fn derive_view(all_books: &[Book], sort_key: SortKey, filter: &str, page: usize) -> DerivedView {
    let mut matches = filter_by_language(all_books, filter);
    sort_books(&mut matches, sort_key);

    let total_matches = matches.len();
    let page = page.max(1);
    let books: Vec<Book> = matches
        .into_iter()
        .skip((page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .cloned()
        .collect();

    DerivedView {
        books,
        total_matches,
        total_pages: total_pages(total_matches),
        page,
    }
}
