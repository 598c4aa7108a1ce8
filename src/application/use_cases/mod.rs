mod export_profiles;
mod find_email;
mod list_profiles;
mod scrape_profiles;
mod search_profiles;

pub use export_profiles::*;
pub use find_email::*;
pub use list_profiles::*;
pub use scrape_profiles::*;
pub use search_profiles::*;
