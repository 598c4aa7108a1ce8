//! # Domain Layer
//!
//! Profiles, platforms and the parsing rules applied to search results.
//! This layer is independent of external frameworks and infrastructure.

pub mod models;
pub mod services;

pub use models::*;
pub use services::*;
