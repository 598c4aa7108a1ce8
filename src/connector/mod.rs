//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Search (SerpApi, plus an offline mock)
//! - Email lookup (Apollo person search, Hunter domain search)
//! - Storage (DuckDB, Supabase REST, in-memory)
//! - Entry points (CLI controllers and the HTTP API)

pub mod adapter;
pub mod api;
pub mod http;

pub use adapter::*;
pub use api::{Container, ContainerConfig, ProfileStore, Router};
