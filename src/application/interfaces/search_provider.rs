use async_trait::async_trait;

use crate::domain::{DomainError, Platform, Profile};

/// Maximum number of results requested from the search provider per call.
pub const MAX_SEARCH_RESULTS: usize = 20;

/// Site-scoped web search returning normalized profiles.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Search profile pages of `platform` matching `keywords`.
    ///
    /// Returns `DomainError::NotFound` when the provider has no results, and
    /// `DomainError::Upstream` for any transport or provider failure.
    async fn search(&self, keywords: &str, platform: Platform) -> Result<Vec<Profile>, DomainError>;

    fn provider_name(&self) -> &str;
}
