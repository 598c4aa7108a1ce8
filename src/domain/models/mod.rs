mod domain_email;
mod platform;
mod profile;
mod scraped_profile;

pub use domain_email::*;
pub use platform::*;
pub use profile::*;
pub use scraped_profile::*;
