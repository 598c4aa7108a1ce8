use async_trait::async_trait;

use crate::domain::{DomainEmail, DomainError};

/// Lists the addresses a provider knows for a domain.
#[async_trait]
pub trait DomainEmailSearch: Send + Sync {
    /// Unranked; `Ok(None)` when nothing is known for the domain.
    async fn find_domain_emails(&self, domain: &str) -> Result<Option<Vec<DomainEmail>>, DomainError>;

    fn provider_name(&self) -> &str;
}
