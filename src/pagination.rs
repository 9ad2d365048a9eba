use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Default number of pages skipped by paged reads.
pub const DEFAULT_SKIP_PAGES: u32 = 0;
/// Default page size for paged reads.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// `skippages`/`pagesize` pagination used by REST collections and Open `paged` endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Page {
    pub skip_pages: u32,
    pub page_size: u32,
}

impl Page {
    pub const fn new(skip_pages: u32, page_size: u32) -> Self {
        Self {
            skip_pages,
            page_size,
        }
    }

    /// Renders the query string, e.g. `skippages=0&pagesize=100`.
    pub fn query(&self) -> String {
        format!("skippages={}&pagesize={}", self.skip_pages, self.page_size)
    }

    /// Appends this page's query string to `path`.
    pub(crate) fn apply(&self, path: &str) -> String {
        format!("{path}?{}", self.query())
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(DEFAULT_SKIP_PAGES, DEFAULT_PAGE_SIZE)
    }
}

/// Appends a continuation cursor to `path`, e.g. `projectgroups?cursor=0`.
pub(crate) fn with_cursor(path: &str, cursor: u64) -> String {
    format!("{path}?cursor={cursor}")
}

/// Paged REST collection wrapper.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Collection<T> {
    pub collection: Vec<T>,
    pub pagination: Option<Pagination>,
    pub metadata: Option<Metadata>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

/// Pagination block of a REST collection.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub skip_pages: Option<u32>,
    pub page_size: Option<u32>,
    pub max_page_size_allowed: Option<u32>,
    pub results: Option<u64>,
    pub results_without_filter: Option<u64>,
    pub first_page: Option<String>,
    pub next_page: Option<String>,
    pub previous_page: Option<String>,
    pub last_page: Option<String>,
}

/// Operations a REST collection advertises, keyed by action name (`create`, `book`, ...).
pub type Metadata = BTreeMap<String, MetadataAction>;

/// One advertised operation on a REST collection.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataAction {
    pub description: Option<String>,
    pub href: Option<String>,
    pub http_method: Option<String>,
}

/// Bulk Open-family response: a batch of items plus the cursor for the next batch.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Items<T> {
    pub items: Vec<T>,
    pub cursor: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::{Collection, Page, with_cursor};

    #[test]
    fn default_page_renders_zero_and_hundred() {
        assert_eq!(Page::default().query(), "skippages=0&pagesize=100");
        assert_eq!(
            Page::default().apply("/customers"),
            "/customers?skippages=0&pagesize=100"
        );
    }

    #[test]
    fn explicit_page_renders_verbatim() {
        assert_eq!(Page::new(3, 25).apply("/units"), "/units?skippages=3&pagesize=25");
    }

    #[test]
    fn cursor_is_appended() {
        assert_eq!(
            with_cursor("api/v22.0.0/projectgroups", 234),
            "api/v22.0.0/projectgroups?cursor=234"
        );
    }

    #[test]
    fn collection_tolerates_missing_metadata() {
        let parsed: Collection<serde_json::Value> = serde_json::from_str(
            r#"{
                "collection": [{"a": 1}],
                "pagination": {"skipPages": 0, "pageSize": 20, "results": 1},
                "self": "https://restapi.e-conomic.com/units"
            }"#,
        )
        .expect("valid collection");
        assert_eq!(parsed.collection.len(), 1);
        assert_eq!(parsed.pagination.and_then(|p| p.page_size), Some(20));
        assert!(parsed.metadata.is_none());
    }
}
