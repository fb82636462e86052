//! Error handling for the War game core.

pub mod domain;

pub use domain::DomainError;
