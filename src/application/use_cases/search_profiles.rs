use std::sync::Arc;

use tracing::{info, warn};

use crate::application::SearchProvider;
use crate::domain::{DomainError, Platform, Profile};

pub const MISSING_PARAMETERS: &str = "Missing required parameters";
pub const SEARCH_KEY_MISSING: &str = "SerpApi key is missing (set SERPAPI_KEY)";

/// A validated keyword + platform pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    keywords: String,
    platform: Platform,
}

impl SearchRequest {
    pub fn new(keywords: impl Into<String>, platform: Platform) -> Result<Self, DomainError> {
        let keywords = keywords.into();
        if keywords.trim().is_empty() {
            return Err(DomainError::invalid_input(MISSING_PARAMETERS));
        }
        Ok(Self { keywords, platform })
    }

    /// Build a request from raw, possibly absent, query parameters.
    pub fn parse(keywords: Option<&str>, platform: Option<&str>) -> Result<Self, DomainError> {
        let (keywords, platform) = match (keywords, platform) {
            (Some(k), Some(p)) if !k.trim().is_empty() && !p.trim().is_empty() => (k, p),
            _ => return Err(DomainError::invalid_input(MISSING_PARAMETERS)),
        };
        Self::new(keywords, platform.parse()?)
    }

    pub fn keywords(&self) -> &str {
        &self.keywords
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }
}

/// Runs one site-scoped search through the configured provider.
pub struct SearchProfilesUseCase {
    provider: Option<Arc<dyn SearchProvider>>,
}

impl SearchProfilesUseCase {
    pub fn new(provider: Option<Arc<dyn SearchProvider>>) -> Self {
        Self { provider }
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn execute(&self, request: &SearchRequest) -> Result<Vec<Profile>, DomainError> {
        let provider = self
            .provider
            .as_ref()
            .ok_or_else(|| DomainError::configuration(SEARCH_KEY_MISSING))?;

        info!(
            "Searching {} for \"{}\" via {}",
            request.platform(),
            request.keywords(),
            provider.provider_name()
        );

        match provider.search(request.keywords(), request.platform()).await {
            Ok(profiles) if profiles.is_empty() => Err(DomainError::not_found(format!(
                "No results for \"{}\" on {}",
                request.keywords(),
                request.platform()
            ))),
            Ok(profiles) => {
                info!("{} returned {} profiles", request.platform(), profiles.len());
                Ok(profiles)
            }
            Err(e) => {
                warn!("Search on {} failed: {}", request.platform(), e);
                Err(e)
            }
        }
    }
}
