mod apollo_email_finder;
mod duckdb_profile_repository;
mod hunter_domain_search;
mod in_memory_profile_repository;
mod mock_email_finder;
mod mock_search_provider;
mod serpapi_search_provider;
mod supabase_profile_repository;

pub use apollo_email_finder::*;
pub use duckdb_profile_repository::*;
pub use hunter_domain_search::*;
pub use in_memory_profile_repository::*;
pub use mock_email_finder::*;
pub use mock_search_provider::*;
pub use serpapi_search_provider::*;
pub use supabase_profile_repository::*;
