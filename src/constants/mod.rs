//! Application constants module.
//!
//! Centralizes constant strings used throughout the application.

pub mod errors;

pub use errors::*;
