//! Cover image and detail-page URL helpers
//!
//! Both are deterministic templates over catalog identifiers; nothing here
//! is ever parsed back or validated.

use crate::client::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};

/// Base URL of the cover image service
pub const COVER_BASE_URL: &str = "https://covers.openlibrary.org";

/// Cover image size, as encoded in the cover service's URL scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoverSize {
    #[serde(rename = "S")]
    Small,
    #[serde(rename = "M")]
    Medium,
    #[default]
    #[serde(rename = "L")]
    Large,
}

impl CoverSize {
    fn code(self) -> &'static str {
        match self {
            Self::Small => "S",
            Self::Medium => "M",
            Self::Large => "L",
        }
    }
}

/// URL of a book's cover image, or `None` when the book has no cover
pub fn cover_image_url(cover_id: Option<u64>, size: CoverSize) -> Option<String> {
    cover_id.map(|id| format!("{}/b/id/{}-{}.jpg", COVER_BASE_URL, id, size.code()))
}

/// Detail-page URL for a catalog key (keys begin with `/`)
pub fn detail_url(key: &str) -> String {
    format!("{}{}", DEFAULT_BASE_URL, key)
}
