use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::{SearchProvider, MAX_SEARCH_RESULTS};
use crate::domain::{extract_name_from_source, DomainError, Platform, Profile};

pub const SERPAPI_BASE_URL: &str = "https://serpapi.com";
const SEARCH_PATH: &str = "/search.json";
const ENGINE: &str = "google";
/// SerpApi reports an empty Google result page as an error string.
const NO_RESULTS_MARKER: &str = "hasn't returned any results";

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    organic_results: Option<Vec<OrganicResult>>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
struct OrganicResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    snippet: Option<String>,
    #[serde(default)]
    source: Option<String>,
}

/// [`SearchProvider`] backed by SerpApi's Google engine.
///
/// Each search is restricted to the platform's profile pages with a
/// `site:` operator and asks for at most [`MAX_SEARCH_RESULTS`] organic
/// results, bypassing SerpApi's result cache.
pub struct SerpApiSearchProvider {
    client: reqwest::Client,
    api_key: String,
    url: String,
}

impl SerpApiSearchProvider {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), SEARCH_PATH);
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            url,
        }
    }

    /// `site:<scope> "<keywords>"`
    pub fn build_query(keywords: &str, platform: Platform) -> String {
        format!("site:{} \"{}\"", platform.site_scope(), keywords)
    }

    fn to_profile(result: OrganicResult, platform: Platform) -> Option<Profile> {
        let url = result.link.filter(|l| !l.is_empty())?;
        let name = extract_name_from_source(result.source.as_deref());
        Some(Profile::new(
            result.title,
            name.first_name,
            name.last_name,
            url,
            platform,
            result.snippet,
        ))
    }
}

#[async_trait]
impl SearchProvider for SerpApiSearchProvider {
    async fn search(&self, keywords: &str, platform: Platform) -> Result<Vec<Profile>, DomainError> {
        let query = Self::build_query(keywords, platform);
        let num = MAX_SEARCH_RESULTS.to_string();
        debug!("SerpApi query: {}", query);

        let response = self
            .client
            .get(&self.url)
            .query(&[
                ("engine", ENGINE),
                ("q", query.as_str()),
                ("num", num.as_str()),
                ("no_cache", "true"),
                ("output", "json"),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| DomainError::upstream(format!("SerpApi: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("SerpApi: API returned {status}: {body}");
            return Err(DomainError::upstream(format!("SerpApi: API returned {status}")));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| DomainError::upstream(format!("SerpApi: failed to parse response: {e}")))?;

        if let Some(error) = api_response.error {
            if error.contains(NO_RESULTS_MARKER) {
                return Err(DomainError::not_found(error));
            }
            warn!("SerpApi: search error: {error}");
            return Err(DomainError::upstream(format!("SerpApi: {error}")));
        }

        let profiles: Vec<Profile> = api_response
            .organic_results
            .unwrap_or_default()
            .into_iter()
            .take(MAX_SEARCH_RESULTS)
            .filter_map(|r| Self::to_profile(r, platform))
            .collect();

        if profiles.is_empty() {
            return Err(DomainError::not_found(format!(
                "No results found for {}",
                query
            )));
        }

        Ok(profiles)
    }

    fn provider_name(&self) -> &str {
        "serpapi"
    }
}
