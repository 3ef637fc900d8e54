//! Book records and the Open Library wire format

use serde::{Deserialize, Serialize};

/// A book record as understood by the rest of the crate
///
/// Every field is optional on the wire; defaulting happens once, in
/// `From<SearchDoc>`, so nothing downstream needs to second-guess the shape.
/// Records are immutable once received: the pipeline only selects, reorders,
/// and slices them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Book title, absent in malformed catalog entries
    pub title: Option<String>,

    /// Author names, empty when the catalog has none
    pub author_names: Vec<String>,

    /// Year of first publication
    pub first_publish_year: Option<u32>,

    /// Edition language codes (3-letter, e.g. "eng"), empty when absent
    pub languages: Vec<String>,

    /// Cover image identifier; absence means no cover exists
    pub cover_id: Option<u64>,

    /// Opaque catalog identifier, begins with `/` (e.g. "/works/OL45883W")
    pub key: Option<String>,
}

impl Book {
    /// Title with the sort/display default applied (absent reads as "")
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// First language code, or "" when the list is absent or empty
    pub fn primary_language(&self) -> &str {
        self.languages.first().map(String::as_str).unwrap_or("")
    }
}

/// One element of the `docs` array in an Open Library search response
#[derive(Debug, Clone, Deserialize)]
pub struct SearchDoc {
    pub title: Option<String>,
    #[serde(default)]
    pub author_name: Vec<String>,
    pub first_publish_year: Option<u32>,
    #[serde(default)]
    pub language: Vec<String>,
    pub cover_i: Option<u64>,
    pub key: Option<String>,
}

impl From<SearchDoc> for Book {
    fn from(doc: SearchDoc) -> Self {
        Self {
            title: doc.title,
            author_names: doc.author_name,
            first_publish_year: doc.first_publish_year,
            languages: doc.language,
            cover_id: doc.cover_i,
            key: doc.key,
        }
    }
}

/// Body of `GET /search.json`
///
/// An absent `docs` array means zero matches, not an error.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub docs: Vec<SearchDoc>,
}

/// Sort key for the result pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Lexicographic ascending on title (absent title sorts as "")
    Title,
    /// Ascending on first publish year (undated books sort first)
    Year,
    /// Lexicographic ascending on the first language code
    Language,
}

impl Default for SortKey {
    fn default() -> Self {
        Self::Title
    }
}

impl SortKey {
    /// Parse the user-facing name of a sort key
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "title" => Some(Self::Title),
            "year" => Some(Self::Year),
            "language" => Some(Self::Language),
            _ => None,
        }
    }
}

/// A language-filter choice offered by the front end
#[derive(Debug, Clone, Copy, Serialize)]
pub struct KnownLanguage {
    /// 3-letter code, used verbatim as the filter key
    pub code: &'static str,
    /// Human-readable label
    pub label: &'static str,
}

/// The language choices the reference front end offers
pub const KNOWN_LANGUAGES: &[KnownLanguage] = &[
    KnownLanguage { code: "eng", label: "English" },
    KnownLanguage { code: "hin", label: "Hindi" },
    KnownLanguage { code: "tel", label: "Telugu" },
    KnownLanguage { code: "tam", label: "Tamil" },
    KnownLanguage { code: "kan", label: "Kannada" },
    KnownLanguage { code: "mal", label: "Malayalam" },
    KnownLanguage { code: "fre", label: "French" },
    KnownLanguage { code: "spa", label: "Spanish" },
    KnownLanguage { code: "ger", label: "German" },
    KnownLanguage { code: "ita", label: "Italian" },
    KnownLanguage { code: "ara", label: "Arabic" },
    KnownLanguage { code: "mar", label: "Marathi" },
];
