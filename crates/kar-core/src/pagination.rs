//! List parameters and paginated list envelopes.
//!
//! Lists are paginated by the backend. The client only carries the page
//! number, page size, and search/filter terms, and reads whichever envelope
//! the resource answers with.

use serde::{Deserialize, Deserializer, Serialize};

use crate::status::Status;

/// Largest page size the client will request.
pub const MAX_LIMIT: u32 = 100;

/// Page, size, search and filter terms for a list request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ListParams {
    page: u32,
    limit: u32,
    search: Option<String>,
    status: Option<Status>,
    filters: Vec<(String, String)>,
}

impl Default for ListParams {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

impl ListParams {
    /// Create params with `page` clamped to at least 1 and `limit` to `1..=MAX_LIMIT`.
    #[must_use]
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_LIMIT),
            search: None,
            status: None,
            filters: Vec::new(),
        }
    }

    /// Set the search term. A blank term clears the search; a changed term
    /// sends the list back to the first page.
    #[must_use]
    pub fn with_search(mut self, search: Option<&str>) -> Self {
        let next = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string);
        if next != self.search {
            self.page = 1;
        }
        self.search = next;
        self
    }

    /// Jump to `page` (at least 1), keeping search and filters.
    #[must_use]
    pub const fn with_page(mut self, page: u32) -> Self {
        self.page = if page == 0 { 1 } else { page };
        self
    }

    #[must_use]
    pub const fn with_status(mut self, status: Option<Status>) -> Self {
        self.status = status;
        self
    }

    /// Add an extra backend filter. Blank values are dropped.
    #[must_use]
    pub fn with_filter(mut self, key: &str, value: &str) -> Self {
        let value = value.trim();
        if !value.is_empty() {
            self.filters.push((key.to_string(), value.to_string()));
        }
        self
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    #[must_use]
    pub const fn status(&self) -> Option<Status> {
        self.status
    }

    /// Query-string pairs in a stable order.
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];
        if let Some(search) = &self.search {
            query.push(("search".to_string(), search.clone()));
        }
        if let Some(status) = self.status {
            query.push(("status".to_string(), status.as_str().to_string()));
        }
        query.extend(self.filters.iter().cloned());
        query
    }
}

/// One page of records from a list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

impl<T> Page<T> {
    /// Number of pages, at least 1.
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        if self.limit == 0 {
            return 1;
        }
        self.total.div_ceil(u64::from(self.limit)).max(1)
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.total_pages()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaginationMeta {
    #[serde(default, alias = "totalItems", alias = "totalDocs", alias = "count")]
    total: Option<u64>,
    #[serde(default, alias = "currentPage")]
    page: Option<u32>,
    #[serde(default, alias = "pageSize", alias = "perPage")]
    limit: Option<u32>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Paged {
        data: Vec<T>,
        pagination: PaginationMeta,
    },
    Flat {
        data: Vec<T>,
        #[serde(flatten)]
        meta: PaginationMeta,
    },
    Bare(Vec<T>),
}

impl<'de, T> Deserialize<'de> for Page<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (items, meta) = match Envelope::<T>::deserialize(deserializer)? {
            Envelope::Paged { data, pagination } => (data, Some(pagination)),
            Envelope::Flat { data, meta } => (data, Some(meta)),
            Envelope::Bare(data) => (data, None),
        };
        let count = items.len() as u64;
        let (total, page, limit) = meta.map_or((None, None, None), |m| (m.total, m.page, m.limit));
        let limit = limit.unwrap_or_else(|| u32::try_from(count).unwrap_or(u32::MAX));
        Ok(Self {
            total: total.unwrap_or(count),
            page: page.unwrap_or(1).max(1),
            limit,
            items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn clamps_page_and_limit() {
        let params = ListParams::new(0, 500);
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), MAX_LIMIT);
        let params = ListParams::new(3, 0);
        assert_eq!(params.limit(), 1);
    }

    #[test]
    fn changing_search_resets_page() {
        let params = ListParams::new(4, 10).with_search(Some("steel"));
        assert_eq!(params.page(), 1);
        assert_eq!(params.search(), Some("steel"));
    }

    #[test]
    fn explicit_page_applies_after_search() {
        let params = ListParams::new(1, 10)
            .with_search(Some("steel"))
            .with_page(3);
        assert_eq!(params.page(), 3);
        assert_eq!(ListParams::default().with_page(0).page(), 1);
    }

    #[test]
    fn blank_search_is_omitted() {
        let params = ListParams::new(2, 10).with_search(Some("   "));
        assert_eq!(params.search(), None);
        assert_eq!(params.page(), 2);
        assert!(params.to_query().iter().all(|(k, _)| k != "search"));
    }

    #[test]
    fn query_carries_status_and_filters() {
        let params = ListParams::new(2, 25)
            .with_status(Some(Status::InProgress))
            .with_filter("vendor", "v-1")
            .with_filter("empty", " ");
        assert_eq!(
            params.to_query(),
            vec![
                ("page".to_string(), "2".to_string()),
                ("limit".to_string(), "25".to_string()),
                ("status".to_string(), "in_progress".to_string()),
                ("vendor".to_string(), "v-1".to_string()),
            ]
        );
    }

    #[test]
    fn reads_nested_pagination_envelope() {
        let page: Page<u32> = serde_json::from_str(
            r#"{"data":[1,2,3],"pagination":{"total":23,"page":2,"limit":3}}"#,
        )
        .unwrap();
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.total, 23);
        assert_eq!(page.total_pages(), 8);
        assert!(page.has_next());
    }

    #[test]
    fn reads_flat_envelope_with_aliases() {
        let page: Page<u32> =
            serde_json::from_str(r#"{"data":[5],"totalItems":11,"currentPage":3,"pageSize":5}"#)
                .unwrap();
        assert_eq!(page.total, 11);
        assert_eq!(page.page, 3);
        assert_eq!(page.limit, 5);
        assert!(!page.has_next());
    }

    #[test]
    fn reads_bare_array() {
        let page: Page<u32> = serde_json::from_str("[7,8]").unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages(), 1);
    }

    #[test]
    fn empty_page_has_one_page() {
        let page: Page<u32> = serde_json::from_str(r#"{"data":[]}"#).unwrap();
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages(), 1);
    }
}
