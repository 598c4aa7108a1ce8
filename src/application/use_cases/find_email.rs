use std::sync::Arc;

use tracing::{debug, info};

use crate::application::{DomainEmailSearch, EmailFinder};
use crate::domain::{DomainEmail, DomainError};

pub const APOLLO_KEY_MISSING: &str = "Apollo API key is missing";
pub const HUNTER_KEY_MISSING: &str = "Hunter.io API key is missing";

fn require(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::invalid_input(format!("'{}' is required", field)));
    }
    Ok(())
}

/// Looks up a single best-guess address for a person at a domain.
pub struct FindEmailUseCase {
    finder: Option<Arc<dyn EmailFinder>>,
}

impl FindEmailUseCase {
    pub fn new(finder: Option<Arc<dyn EmailFinder>>) -> Self {
        Self { finder }
    }

    pub async fn execute(&self, name: &str, domain: &str) -> Result<Option<String>, DomainError> {
        let finder = self
            .finder
            .as_ref()
            .ok_or_else(|| DomainError::configuration(APOLLO_KEY_MISSING))?;
        require("name", name)?;
        require("domain", domain)?;

        let email = finder.find_email(name.trim(), domain.trim()).await?;
        debug!(
            "{} email lookup for {} at {}: {:?}",
            finder.provider_name(),
            name,
            domain,
            email
        );
        Ok(email)
    }
}

/// Lists the addresses known for a domain.
pub struct FindDomainEmailsUseCase {
    search: Option<Arc<dyn DomainEmailSearch>>,
}

impl FindDomainEmailsUseCase {
    pub fn new(search: Option<Arc<dyn DomainEmailSearch>>) -> Self {
        Self { search }
    }

    pub async fn execute(&self, domain: &str) -> Result<Option<Vec<DomainEmail>>, DomainError> {
        let search = self
            .search
            .as_ref()
            .ok_or_else(|| DomainError::configuration(HUNTER_KEY_MISSING))?;
        require("domain", domain)?;

        let emails = search.find_domain_emails(domain.trim()).await?;
        info!(
            "{} knows {} addresses for {}",
            search.provider_name(),
            emails.as_ref().map_or(0, Vec::len),
            domain
        );
        Ok(emails)
    }
}
