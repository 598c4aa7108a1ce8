use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::ProfileRepository;
use crate::domain::{DomainError, ProfileDraft, ScrapedProfile};

/// Process-local profile store, in insertion order.
pub struct InMemoryProfileRepository {
    profiles: Arc<Mutex<Vec<ScrapedProfile>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self {
            profiles: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl Default for InMemoryProfileRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_by_url(&self, profile_url: &str) -> Result<Option<ScrapedProfile>, DomainError> {
        let profiles = self.profiles.lock().await;
        Ok(profiles
            .iter()
            .find(|p| p.profile_url() == profile_url)
            .cloned())
    }

    async fn insert(&self, draft: &ProfileDraft) -> Result<Option<ScrapedProfile>, DomainError> {
        let mut profiles = self.profiles.lock().await;
        if profiles.iter().any(|p| p.profile_url() == draft.profile_url()) {
            return Ok(None);
        }

        let saved = draft.clone().into_scraped(Utc::now());
        profiles.push(saved.clone());
        debug!("Stored profile {} in memory", saved.profile_url());
        Ok(Some(saved))
    }

    async fn list(&self) -> Result<Vec<ScrapedProfile>, DomainError> {
        let profiles = self.profiles.lock().await;
        let mut newest_first: Vec<ScrapedProfile> = profiles.iter().rev().cloned().collect();
        newest_first.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(newest_first)
    }
}
