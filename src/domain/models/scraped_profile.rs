use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Platform;

/// A profile that has been deduplicated and is ready to be persisted.
///
/// The store assigns `created_at` when the draft is inserted, turning it
/// into a [`ScrapedProfile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
    id: String,
    name: String,
    email: Option<String>,
    profile_url: String,
    org: String,
    platform: Platform,
    keywords: String,
}

impl ProfileDraft {
    pub fn new(
        name: impl Into<String>,
        profile_url: impl Into<String>,
        org: impl Into<String>,
        platform: Platform,
        keywords: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            email: None,
            profile_url: profile_url.into(),
            org: org.into(),
            platform,
            keywords: keywords.into(),
        }
    }

    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn profile_url(&self) -> &str {
        &self.profile_url
    }

    pub fn org(&self) -> &str {
        &self.org
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn keywords(&self) -> &str {
        &self.keywords
    }

    /// Stamp the draft with its persistence time.
    pub fn into_scraped(self, created_at: DateTime<Utc>) -> ScrapedProfile {
        ScrapedProfile {
            id: self.id,
            name: self.name,
            email: self.email,
            profile_url: self.profile_url,
            org: self.org,
            platform: self.platform,
            keywords: self.keywords,
            created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedProfile {
    id: String,
    name: String,
    email: Option<String>,
    profile_url: String,
    org: String,
    platform: Platform,
    keywords: String,
    created_at: DateTime<Utc>,
}

impl ScrapedProfile {
    /// Reconstitutes from persisted data (used by adapters).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: String,
        name: String,
        email: Option<String>,
        profile_url: String,
        org: String,
        platform: Platform,
        keywords: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            profile_url,
            org,
            platform,
            keywords,
            created_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn profile_url(&self) -> &str {
        &self.profile_url
    }

    pub fn org(&self) -> &str {
        &self.org
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn keywords(&self) -> &str {
        &self.keywords
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn summary(&self) -> String {
        let org = if self.org.is_empty() { "-" } else { &self.org };
        format!("{} [{}] {} ({})", self.name, self.platform, self.profile_url, org)
    }
}
