//! Request-level helpers shared by the handlers.

pub mod request_ext;

pub use request_ext::RequestExt;
