//! CLI command implementations

mod languages;
mod search;

pub use languages::languages;
pub use search::search;
