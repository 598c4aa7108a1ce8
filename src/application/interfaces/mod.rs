mod domain_email_search;
mod email_finder;
mod profile_repository;
mod search_provider;

pub use domain_email_search::*;
pub use email_finder::*;
pub use profile_repository::*;
pub use search_provider::*;
