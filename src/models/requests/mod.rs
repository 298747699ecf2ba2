//! Request models for the paginated endpoints.

use serde::Deserialize;
use validator::Validate;

/// Query parameters for the paginated list endpoints.
///
/// Missing parameters default to 0 and therefore fail validation, matching
/// the behavior of clients that omit `page` or `size` entirely.
#[derive(Debug, Deserialize, Validate)]
pub struct PageQuery {
    /// Page number, 1-indexed
    #[serde(default)]
    #[validate(range(min = 1, message = "Invalid page or size parameter"))]
    pub page: i64,
    /// Maximum number of items per page
    #[serde(default)]
    #[validate(range(min = 1, message = "Invalid page or size parameter"))]
    pub size: i64,
}
