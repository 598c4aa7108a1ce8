use async_trait::async_trait;

use crate::domain::{DomainError, ProfileDraft, ScrapedProfile};

/// Persistence for scraped profiles, keyed by profile URL.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_url(&self, profile_url: &str) -> Result<Option<ScrapedProfile>, DomainError>;

    /// Insert a draft, assigning `created_at`.
    ///
    /// Returns `Ok(None)` without writing when the store detects a row with the
    /// same profile URL. Stores that cannot detect one insert unconditionally
    /// and rely on the caller's lookup.
    async fn insert(&self, draft: &ProfileDraft) -> Result<Option<ScrapedProfile>, DomainError>;

    /// All rows, newest first.
    async fn list(&self) -> Result<Vec<ScrapedProfile>, DomainError>;
}
