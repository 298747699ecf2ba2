//! Alternate paged-list response shape.
//!
//! Same computation as [`PagedResult`](super::pagination::PagedResult), but
//! serialized with PascalCase field names and has-next/has-previous flags in
//! place of a self link, for clients expecting the paged-list convention.

use serde::Serialize;
use utoipa::ToSchema;

use super::pagination::{page_url, Meta};

/// Pagination metadata in the paged-list convention.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct PagedListMeta {
    /// Total number of items across all pages
    #[schema(example = 1000)]
    pub total_count: u64,
    /// Number of pages needed to cover all items
    #[schema(example = 100)]
    pub page_count: u64,
    /// Current page number, 1-indexed
    #[schema(example = 1)]
    pub current_page: u64,
    /// Maximum items per page
    #[schema(example = 10)]
    pub page_size: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

/// Navigational links in the paged-list convention. No self link.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct PagedListLinks {
    #[schema(example = "http://localhost:8080/your2?page=1&size=10")]
    pub first: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "http://localhost:8080/your2?page=100&size=10")]
    pub last: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
}

/// Paginated response in the paged-list convention.
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = PagedPersonListResult)]
#[serde(rename_all = "PascalCase")]
pub struct PagedListResult<T: Serialize> {
    /// Items on the current page
    pub data: Vec<T>,
    /// Pagination metadata
    pub meta: PagedListMeta,
    /// Navigational links
    pub links: PagedListLinks,
}

impl<T: Serialize> PagedListResult<T> {
    /// Assemble the paged-list result from the shared metadata computation.
    pub fn new(data: Vec<T>, total: u64, page: u64, size: u64, base_url: &str) -> Self {
        let meta = Meta::compute(total, data.len() as u64, page, size);
        let url = |page: u64| page_url(base_url, page, size);

        let links = PagedListLinks {
            first: url(1),
            last: (meta.total_pages >= 1).then(|| url(meta.total_pages)),
            next: meta.has_next_page().then(|| url(meta.current_page + 1)),
            previous: meta.has_previous_page().then(|| url(meta.current_page - 1)),
        };

        Self {
            data,
            meta: PagedListMeta {
                total_count: meta.total,
                page_count: meta.total_pages,
                current_page: meta.current_page,
                page_size: meta.per_page,
                has_next_page: meta.has_next_page(),
                has_previous_page: meta.has_previous_page(),
            },
            links,
        }
    }
}
