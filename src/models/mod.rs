//! Data models organized by type.

pub mod person;
pub mod requests;
pub mod responses;

pub use person::*;
pub use requests::*;
pub use responses::*;
