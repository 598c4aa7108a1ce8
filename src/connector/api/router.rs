use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{EmailController, ProfilesController, ScrapeController, SearchController};

pub struct Router<'a> {
    scrape_controller: ScrapeController<'a>,
    search_controller: SearchController<'a>,
    email_controller: EmailController<'a>,
    profiles_controller: ProfilesController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            scrape_controller: ScrapeController::new(container),
            search_controller: SearchController::new(container),
            email_controller: EmailController::new(container),
            profiles_controller: ProfilesController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Scrape {
                keywords,
                platforms,
                enrich,
                export,
            } => {
                self.scrape_controller
                    .scrape(keywords, platforms, enrich, export)
                    .await
            }
            Commands::Search { keywords, platform } => {
                self.search_controller.search(keywords, platform).await
            }
            Commands::Email { name, domain } => self.email_controller.find_email(name, domain).await,
            Commands::DomainEmails { domain } => self.email_controller.domain_emails(domain).await,
            Commands::List => self.profiles_controller.list().await,
            Commands::Export { output } => self.profiles_controller.export(output).await,
            Commands::Serve { .. } => unreachable!("Serve command is handled separately in main"),
        }
    }
}
