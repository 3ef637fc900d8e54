//! Error types for Bookfinder Core

use thiserror::Error;

pub use reqwest::StatusCode;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised by the catalog client
///
/// All three variants are treated the same by the search controller (logged
/// and swallowed, leaving the state as if the search had matched nothing),
/// but keeping them distinct makes the diagnostics useful.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Http(#[source] reqwest::Error),

    #[error("catalog returned status {0}")]
    Status(StatusCode),

    #[error("malformed catalog response: {0}")]
    Decode(#[source] reqwest::Error),
}
