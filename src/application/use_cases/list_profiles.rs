use std::sync::Arc;

use crate::application::ProfileRepository;
use crate::domain::{DomainError, ScrapedProfile};

pub struct ListProfilesUseCase {
    profile_repo: Arc<dyn ProfileRepository>,
}

impl ListProfilesUseCase {
    pub fn new(profile_repo: Arc<dyn ProfileRepository>) -> Self {
        Self { profile_repo }
    }

    pub async fn execute(&self) -> Result<Vec<ScrapedProfile>, DomainError> {
        self.profile_repo.list().await
    }

    pub async fn get_by_url(&self, profile_url: &str) -> Result<Option<ScrapedProfile>, DomainError> {
        self.profile_repo.find_by_url(profile_url).await
    }
}
