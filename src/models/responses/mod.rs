//! Response models for the API endpoints.

pub mod paged_list;
pub mod pagination;

pub use paged_list::*;
pub use pagination::*;
