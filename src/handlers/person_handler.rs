//! Handlers for the paginated person list endpoints.
//!
//! Both endpoints run the same validation and the same page computation;
//! they differ only in the serializer applied to the result. The `/your`
//! and `/your2` paths come from the upstream API contract.

use actix_web::{web, HttpRequest, HttpResponse};
use log::{debug, warn};
use validator::Validate;

use crate::constants::ERR_INVALID_PAGE_OR_SIZE;
use crate::errors::ApiError;
use crate::middleware::RequestExt;
use crate::models::{PageQuery, PagedListResult, PagedResult};
use crate::services::PersonService;

/// Validate the raw query, returning the validated page and size.
fn validate_query(query: &PageQuery) -> Result<(u64, u64), ApiError> {
    query.validate().map_err(|_| {
        warn!("Rejected pagination query: page={} size={}", query.page, query.size);
        ApiError::BadRequest(ERR_INVALID_PAGE_OR_SIZE.to_string())
    })?;
    Ok((query.page as u64, query.size as u64))
}

/// List people with self/first/last/prev/next links and count metadata
#[utoipa::path(
    get,
    path = "/your",
    tag = "People",
    params(
        ("page" = i64, Query, description = "Page number, 1-indexed (must be >= 1)"),
        ("size" = i64, Query, description = "Items per page (must be >= 1)")
    ),
    responses(
        (status = 200, description = "One page of people", body = crate::models::PagedResult<crate::models::Person>),
        (status = 400, description = "Invalid page or size parameter", body = crate::errors::ErrorResponse)
    )
)]
pub async fn list_people(
    person_service: web::Data<PersonService>,
    query: web::Query<PageQuery>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let (page, size) = validate_query(&query)?;
    debug!("Listing people: page={} size={}", page, size);

    let (people, total) = person_service.get_page(page, size);
    let result = PagedResult::new(people, total, page, size, &req.base_url());

    Ok(HttpResponse::Ok().json(result))
}

/// List people in the paged-list convention (PascalCase fields, has-next/has-previous flags)
#[utoipa::path(
    get,
    path = "/your2",
    tag = "People",
    params(
        ("page" = i64, Query, description = "Page number, 1-indexed (must be >= 1)"),
        ("size" = i64, Query, description = "Items per page (must be >= 1)")
    ),
    responses(
        (status = 200, description = "One page of people", body = crate::models::PagedListResult<crate::models::Person>),
        (status = 400, description = "Invalid page or size parameter", body = crate::errors::ErrorResponse)
    )
)]
pub async fn list_people_paged_list(
    person_service: web::Data<PersonService>,
    query: web::Query<PageQuery>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let (page, size) = validate_query(&query)?;
    debug!("Listing people (paged-list shape): page={} size={}", page, size);

    let (people, total) = person_service.get_page(page, size);
    let result = PagedListResult::new(people, total, page, size, &req.base_url());

    Ok(HttpResponse::Ok().json(result))
}
