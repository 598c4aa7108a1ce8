pub mod email_controller;
pub mod profiles_controller;
pub mod scrape_controller;
pub mod search_controller;

pub use email_controller::EmailController;
pub use profiles_controller::ProfilesController;
pub use scrape_controller::ScrapeController;
pub use search_controller::SearchController;
