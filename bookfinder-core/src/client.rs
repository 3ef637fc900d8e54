//! Catalog client and search controller
//!
//! `CatalogClient` is the seam between the search logic and the network;
//! `OpenLibraryClient` is the real implementation, and tests substitute an
//! in-memory fake. `SearchController` owns the state machine and drives it
//! through searches, applying the crate's error policy: fetch failures are
//! logged and swallowed, leaving the state indistinguishable from a search
//! that matched nothing.

use crate::error::{CatalogError, Result};
use crate::pipeline::DerivedView;
use crate::state::{SearchState, Transition};
use crate::types::{Book, SearchResponse};
use async_trait::async_trait;

/// Base URL of the Open Library catalog, also the prefix of detail URLs
pub const DEFAULT_BASE_URL: &str = "https://openlibrary.org";

/// A catalog that can be searched by title
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Look up books whose title matches `query`
    ///
    /// Zero matches is a successful empty result, not an error.
    async fn search_by_title(&self, query: &str) -> Result<Vec<Book>>;
}

/// Catalog client backed by the Open Library search endpoint
pub struct OpenLibraryClient {
    http: reqwest::Client,
    base_url: String,
}

impl OpenLibraryClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different base URL (used by tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for OpenLibraryClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogClient for OpenLibraryClient {
    async fn search_by_title(&self, query: &str) -> Result<Vec<Book>> {
        let url = format!(
            "{}/search.json?title={}",
            self.base_url,
            urlencoding::encode(query)
        );
        tracing::debug!(%url, "querying catalog");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(CatalogError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }

        let body: SearchResponse = response.json().await.map_err(CatalogError::Decode)?;
        Ok(body.docs.into_iter().map(Book::from).collect())
    }
}

/// Owns the search state and drives it through a catalog client
///
/// There is exactly one result-set/filter/page state, and this controller is
/// its only writer; all computation over it is synchronous, so the only
/// suspension point is the network call itself.
pub struct SearchController<C: CatalogClient> {
    client: C,
    state: SearchState,
}

impl<C: CatalogClient> SearchController<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            state: SearchState::new(),
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Apply a UI transition (sort, filter, page) to the state
    pub fn apply(&mut self, transition: Transition) {
        self.state.apply(transition);
    }

    /// Run the pipeline over the current state
    pub fn derived(&self) -> DerivedView {
        self.state.derived()
    }

    /// Submit a search
    ///
    /// A blank query is a no-op: no network call, state untouched. Failures
    /// are logged and swallowed; the loading flag is reset on every path.
    pub async fn search(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }

        self.state.apply(Transition::SetQuery(query.to_string()));
        let seq = self.state.next_seq();
        self.state.apply(Transition::SearchStarted { seq });

        match self.client.search_by_title(query).await {
            Ok(books) => {
                tracing::debug!(count = books.len(), "search succeeded");
                self.state.apply(Transition::SearchSucceeded { seq, books });
            }
            Err(err) => {
                tracing::error!(error = %err, query, "catalog search failed");
                self.state.apply(Transition::SearchFailed { seq });
            }
        }
    }
}
