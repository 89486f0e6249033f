use serde::{Deserialize, Serialize};

// SearchResponse is the body of one bibliographic lookup; the service
// only ever reads the docs array.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub docs: Vec<BookDoc>,
}

// BookDoc is one raw search record. The search service returns far
// more fields than these; everything unknown is ignored and every
// field read here may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDoc {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub title_suggest: Option<String>,
    #[serde(default)]
    pub publisher: Option<Vec<String>>,
    #[serde(default)]
    pub publish_year: Option<Vec<i64>>,
    #[serde(default)]
    pub language: Option<Vec<String>>,
    #[serde(default)]
    pub ebook_count_i: i64,
}

// BookInfo is a doc renormalized to the fields book-info lookups care
// about; optional fields are carried only when the record had them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookInfo {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_year: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Vec<String>>,
}

// EbookRecord is a doc renormalized to its electronic-copy count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct EbookRecord {
    pub title: String,
    #[serde(default)]
    pub ebook_count: i64,
}
