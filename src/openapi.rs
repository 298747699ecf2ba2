use utoipa::OpenApi;

use crate::errors::ErrorResponse;
use crate::models::{
    Links, Meta, PagedListLinks, PagedListMeta, PagedListResult, PagedResult, Person,
};

/// OpenAPI documentation for the pagination sample API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pagination Sample API",
        version = "1.0.0",
        description = "A minimal REST API serving paged in-memory person records with pagination links and metadata, in two response conventions."
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "People", description = "Paginated person list endpoints")
    ),
    paths(
        crate::handlers::list_people,
        crate::handlers::list_people_paged_list,
        crate::routes::health_check
    ),
    components(
        schemas(
            Person,
            Meta,
            Links,
            PagedResult<Person>,
            PagedListMeta,
            PagedListLinks,
            PagedListResult<Person>,
            ErrorResponse
        )
    )
)]
pub struct ApiDoc;
