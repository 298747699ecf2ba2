//! Pagination calculator and the primary paged response shape.
//!
//! `Meta` carries the whole computation; both response shapes in this crate
//! are thin serializers over it and the shared `page_url` builder.

use serde::Serialize;
use utoipa::ToSchema;

/// Build the URL for one page: literal query-string concatenation, integer
/// formatting only.
pub(crate) fn page_url(base_url: &str, page: u64, size: u64) -> String {
    format!("{}?page={}&size={}", base_url, page, size)
}

/// Pagination metadata computed once per request.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    /// Total number of items across all pages
    #[schema(example = 1000)]
    pub total: u64,
    /// Number of items on this page
    #[schema(example = 10)]
    pub count: u64,
    /// Maximum items per page
    #[schema(example = 10)]
    pub per_page: u64,
    /// Current page number, 1-indexed
    #[schema(example = 1)]
    pub current_page: u64,
    /// Number of pages needed to cover all items
    #[schema(example = 100)]
    pub total_pages: u64,
}

impl Meta {
    /// Compute pagination metadata. Requires `size >= 1`, which request
    /// validation guarantees before any handler reaches this point.
    pub fn compute(total: u64, count: u64, page: u64, size: u64) -> Self {
        let total_pages = (total as f64 / size as f64).ceil() as u64;

        Self {
            total,
            count,
            per_page: size,
            current_page: page,
            total_pages,
        }
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Navigational links for a page of results.
///
/// `last` is omitted when there are no pages at all; `prev` and `next` are
/// omitted at the respective boundaries.
#[derive(Debug, Serialize, ToSchema)]
pub struct Links {
    #[serde(rename = "self")]
    #[schema(example = "http://localhost:8080/your?page=1&size=10")]
    pub self_link: String,
    #[schema(example = "http://localhost:8080/your?page=1&size=10")]
    pub first: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "http://localhost:8080/your?page=100&size=10")]
    pub last: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl Links {
    pub fn build(base_url: &str, meta: &Meta) -> Self {
        let url = |page: u64| page_url(base_url, page, meta.per_page);

        Self {
            self_link: url(meta.current_page),
            first: url(1),
            last: (meta.total_pages >= 1).then(|| url(meta.total_pages)),
            prev: meta.has_previous_page().then(|| url(meta.current_page - 1)),
            next: meta.has_next_page().then(|| url(meta.current_page + 1)),
        }
    }
}

/// Paginated response with navigational links and metadata.
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = PagedPersonResult)]
pub struct PagedResult<T: Serialize> {
    /// Items on the current page
    pub data: Vec<T>,
    /// Navigational links
    pub links: Links,
    /// Pagination metadata
    pub meta: Meta,
}

impl<T: Serialize> PagedResult<T> {
    /// Assemble the full paged result. Pure function of its arguments.
    pub fn new(data: Vec<T>, total: u64, page: u64, size: u64, base_url: &str) -> Self {
        let meta = Meta::compute(total, data.len() as u64, page, size);
        let links = Links::build(base_url, &meta);

        Self { data, links, meta }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:8080/your";

    #[test]
    fn test_total_pages_is_ceiling_division() {
        assert_eq!(Meta::compute(1000, 10, 1, 10).total_pages, 100);
        assert_eq!(Meta::compute(1001, 10, 1, 10).total_pages, 101);
        assert_eq!(Meta::compute(9, 9, 1, 10).total_pages, 1);
        assert_eq!(Meta::compute(1, 1, 1, 10).total_pages, 1);
        assert_eq!(Meta::compute(0, 0, 1, 10).total_pages, 0);
    }

    #[test]
    fn test_total_pages_covers_all_items() {
        for (total, size) in [(0u64, 1u64), (1, 1), (7, 3), (100, 7), (1000, 10)] {
            let meta = Meta::compute(total, 0, 1, size);
            assert!(
                meta.total_pages * size >= total,
                "total={} size={} total_pages={}",
                total,
                size,
                meta.total_pages
            );
        }
    }

    #[test]
    fn test_first_page_has_no_prev() {
        let result: PagedResult<u32> = PagedResult::new(vec![0; 10], 1000, 1, 10, BASE);
        assert_eq!(result.meta.total_pages, 100);
        assert!(result.links.prev.is_none());
        assert_eq!(
            result.links.next.as_deref(),
            Some("http://localhost:8080/your?page=2&size=10")
        );
    }

    #[test]
    fn test_last_page_has_no_next() {
        let result: PagedResult<u32> = PagedResult::new(vec![0; 10], 1000, 100, 10, BASE);
        assert!(result.links.next.is_none());
        assert_eq!(
            result.links.prev.as_deref(),
            Some("http://localhost:8080/your?page=99&size=10")
        );
    }

    #[test]
    fn test_first_and_last_links_target_boundary_pages() {
        let result: PagedResult<u32> = PagedResult::new(vec![0; 10], 1000, 42, 10, BASE);
        assert_eq!(result.links.first, "http://localhost:8080/your?page=1&size=10");
        assert_eq!(
            result.links.last.as_deref(),
            Some("http://localhost:8080/your?page=100&size=10")
        );
        assert_eq!(
            result.links.self_link,
            "http://localhost:8080/your?page=42&size=10"
        );
    }

    #[test]
    fn test_empty_dataset_omits_last_link() {
        let result: PagedResult<u32> = PagedResult::new(vec![], 0, 1, 10, BASE);
        assert_eq!(result.meta.total_pages, 0);
        assert!(result.data.is_empty());
        assert!(result.links.last.is_none());
        assert!(result.links.prev.is_none());
        assert!(result.links.next.is_none());
        assert_eq!(result.links.first, "http://localhost:8080/your?page=1&size=10");
    }

    #[test]
    fn test_page_beyond_total_pages_has_no_next() {
        let result: PagedResult<u32> = PagedResult::new(vec![], 25, 10, 10, BASE);
        assert_eq!(result.meta.total_pages, 3);
        assert!(result.links.next.is_none());
        // prev still points back toward the valid range
        assert_eq!(
            result.links.prev.as_deref(),
            Some("http://localhost:8080/your?page=9&size=10")
        );
    }

    #[test]
    fn test_meta_counts() {
        let result: PagedResult<u32> = PagedResult::new(vec![0; 3], 23, 3, 10, BASE);
        assert_eq!(result.meta.total, 23);
        assert_eq!(result.meta.count, 3);
        assert_eq!(result.meta.per_page, 10);
        assert_eq!(result.meta.current_page, 3);
        assert_eq!(result.meta.total_pages, 3);
    }

    #[test]
    fn test_serializes_camel_case_and_skips_absent_links() {
        let result: PagedResult<u32> = PagedResult::new(vec![0; 10], 1000, 1, 10, BASE);
        let json = serde_json::to_value(&result).unwrap();

        let meta = json.get("meta").unwrap();
        assert!(meta.get("perPage").is_some());
        assert!(meta.get("currentPage").is_some());
        assert!(meta.get("totalPages").is_some());

        let links = json.get("links").unwrap();
        assert!(links.get("self").is_some());
        assert!(links.get("prev").is_none());
        assert!(links.get("next").is_some());
    }
}
