//! Services organized by domain concern.

pub mod person_service;

pub use person_service::PersonService;
