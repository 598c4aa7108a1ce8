use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::application::DomainEmailSearch;
use crate::domain::{DomainEmail, DomainError};

pub const HUNTER_BASE_URL: &str = "https://api.hunter.io";
const DOMAIN_SEARCH_PATH: &str = "/v2/domain-search";

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    data: Option<ApiData>,
}

#[derive(Deserialize)]
struct ApiData {
    #[serde(default)]
    emails: Option<Vec<DomainEmail>>,
}

/// [`DomainEmailSearch`] backed by Hunter.io's domain search.
pub struct HunterDomainSearch {
    client: reqwest::Client,
    api_key: String,
    url: String,
}

impl HunterDomainSearch {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), DOMAIN_SEARCH_PATH);
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            url,
        }
    }
}

#[async_trait]
impl DomainEmailSearch for HunterDomainSearch {
    async fn find_domain_emails(&self, domain: &str) -> Result<Option<Vec<DomainEmail>>, DomainError> {
        let response = self
            .client
            .get(&self.url)
            .query(&[("domain", domain), ("api_key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| DomainError::upstream(format!("Hunter: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Hunter: API returned {status}: {body}");
            return Err(DomainError::upstream(format!("Hunter: API returned {status}")));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| DomainError::upstream(format!("Hunter: failed to parse response: {e}")))?;

        Ok(api_response
            .data
            .and_then(|d| d.emails)
            .filter(|emails| !emails.is_empty()))
    }

    fn provider_name(&self) -> &str {
        "hunter"
    }
}
