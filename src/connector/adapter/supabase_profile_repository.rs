use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::RequestBuilder;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::ProfileRepository;
use crate::domain::{DomainError, ProfileDraft, ScrapedProfile};

const TABLE_PATH: &str = "/rest/v1/scraped_profiles";
/// Column holding the profile URL in the hosted table.
pub const PROFILE_URL_COLUMN: &str = "profileUrl";
const PLAIN_INSERT_PREFERENCE: &str = "return=representation";
const IGNORE_DUPLICATES_PREFERENCE: &str = "resolution=ignore-duplicates,return=representation";

/// Row shape of the `scraped_profiles` table.
#[derive(Serialize, Deserialize)]
struct ProfileRow {
    id: String,
    name: String,
    email: Option<String>,
    #[serde(rename = "profileUrl")]
    profile_url: String,
    org: String,
    platform: String,
    keywords: String,
    /// Assigned by the database default on insert.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
}

impl ProfileRow {
    fn from_draft(draft: &ProfileDraft) -> Self {
        Self {
            id: draft.id().to_string(),
            name: draft.name().to_string(),
            email: draft.email().map(str::to_string),
            profile_url: draft.profile_url().to_string(),
            org: draft.org().to_string(),
            platform: draft.platform().as_str().to_string(),
            keywords: draft.keywords().to_string(),
            created_at: None,
        }
    }

    fn into_profile(self) -> Result<ScrapedProfile, DomainError> {
        let platform = self.platform.parse().map_err(|e: DomainError| {
            DomainError::storage(format!("Row {} has an invalid platform: {}", self.id, e))
        })?;
        let created_at = self.created_at.ok_or_else(|| {
            DomainError::storage(format!("Row {} has no created_at timestamp", self.id))
        })?;
        Ok(ScrapedProfile::reconstitute(
            self.id,
            self.name,
            self.email,
            self.profile_url,
            self.org,
            platform,
            self.keywords,
            created_at,
        ))
    }
}

/// [`ProfileRepository`] over a hosted Supabase table, through its PostgREST
/// interface.
///
/// By default inserts are plain: the table carries no unique index, so the
/// scrape's lookup under its lock is what keeps URLs unique. When the table
/// does have a unique index on `profileUrl`, [`with_unique_index`] makes
/// inserts ignore conflicting rows, and an empty representation then means
/// the URL was already stored.
///
/// [`with_unique_index`]: SupabaseProfileRepository::with_unique_index
pub struct SupabaseProfileRepository {
    client: reqwest::Client,
    api_key: String,
    url: String,
    unique_index: bool,
}

impl SupabaseProfileRepository {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), TABLE_PATH);
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            url,
            unique_index: false,
        }
    }

    pub fn with_unique_index(mut self, unique_index: bool) -> Self {
        self.unique_index = unique_index;
        self
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }

    async fn fetch_rows(&self, request: RequestBuilder, action: &str) -> Result<Vec<ProfileRow>, DomainError> {
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|e| DomainError::storage(format!("Supabase: {action} request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Supabase: {action} returned {status}: {body}");
            return Err(DomainError::storage(format!(
                "Supabase: {action} returned {status}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| DomainError::storage(format!("Supabase: failed to parse {action} response: {e}")))
    }
}

#[async_trait]
impl ProfileRepository for SupabaseProfileRepository {
    async fn find_by_url(&self, profile_url: &str) -> Result<Option<ScrapedProfile>, DomainError> {
        let filter = format!("eq.{profile_url}");
        let request = self.client.get(&self.url).query(&[
            ("select", "*"),
            (PROFILE_URL_COLUMN, filter.as_str()),
            ("limit", "1"),
        ]);

        let rows = self.fetch_rows(request, "lookup").await?;
        rows.into_iter().next().map(ProfileRow::into_profile).transpose()
    }

    async fn insert(&self, draft: &ProfileDraft) -> Result<Option<ScrapedProfile>, DomainError> {
        let mut request = self.client.post(&self.url);
        request = if self.unique_index {
            request
                .query(&[("on_conflict", PROFILE_URL_COLUMN)])
                .header("Prefer", IGNORE_DUPLICATES_PREFERENCE)
        } else {
            request.header("Prefer", PLAIN_INSERT_PREFERENCE)
        };
        let request = request.json(&[ProfileRow::from_draft(draft)]);

        let rows = self.fetch_rows(request, "insert").await?;
        if rows.is_empty() {
            debug!("Supabase ignored duplicate profile {}", draft.profile_url());
        }
        rows.into_iter().next().map(ProfileRow::into_profile).transpose()
    }

    async fn list(&self) -> Result<Vec<ScrapedProfile>, DomainError> {
        let request = self
            .client
            .get(&self.url)
            .query(&[("select", "*"), ("order", "created_at.desc")]);

        self.fetch_rows(request, "list")
            .await?
            .into_iter()
            .map(ProfileRow::into_profile)
            .collect()
    }
}
