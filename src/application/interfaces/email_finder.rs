use async_trait::async_trait;

use crate::domain::DomainError;

/// Best-guess email lookup for a named person at an organization domain.
#[async_trait]
pub trait EmailFinder: Send + Sync {
    /// `Ok(None)` when the provider knows no address for the person.
    async fn find_email(&self, name: &str, domain: &str) -> Result<Option<String>, DomainError>;

    fn provider_name(&self) -> &str;
}
