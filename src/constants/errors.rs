//! Error message constants used throughout the application.

/// Returned when `page` or `size` is missing, zero, or negative.
pub const ERR_INVALID_PAGE_OR_SIZE: &str = "Invalid page or size parameter";
