//! Bookfinder Core Library
//!
//! This crate provides the data model and search logic for the Bookfinder
//! book search tool. Results come from the Open Library catalog; filtering,
//! sorting, and pagination all happen in memory over the most recent result
//! set, driven by an explicit search state machine.

pub mod client;
pub mod error;
pub mod links;
pub mod pipeline;
pub mod state;
pub mod types;

pub use client::{CatalogClient, OpenLibraryClient, SearchController, DEFAULT_BASE_URL};
pub use error::{CatalogError, Result};
pub use links::{cover_image_url, detail_url, CoverSize};
pub use pipeline::{derive_view, DerivedView, PAGE_SIZE};
pub use state::{SearchState, Transition};
pub use types::{Book, KnownLanguage, SearchDoc, SearchResponse, SortKey, KNOWN_LANGUAGES};
