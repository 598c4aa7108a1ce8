use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::EmailFinder;
use crate::domain::DomainError;

pub const APOLLO_BASE_URL: &str = "https://api.apollo.io";
const SEARCH_PATH: &str = "/api/v1/mixed_people/search";
/// Apollo masks addresses the account has not unlocked with this prefix.
const LOCKED_EMAIL_PREFIX: &str = "email_not_unlocked@";

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    q_organization_domains: Vec<&'a str>,
    q_names: Vec<&'a str>,
    page: u32,
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    person: Option<Person>,
    #[serde(default)]
    people: Vec<Person>,
}

#[derive(Deserialize)]
struct Person {
    #[serde(default)]
    email: Option<String>,
}

/// [`EmailFinder`] backed by Apollo's people search.
pub struct ApolloEmailFinder {
    client: reqwest::Client,
    api_key: String,
    url: String,
}

impl ApolloEmailFinder {
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

    /// The matched person's address, else the first usable one among people.
    fn best_email(response: ApiResponse) -> Option<String> {
        response
            .person
            .into_iter()
            .chain(response.people)
            .filter_map(|p| p.email)
            .map(|e| e.trim().to_string())
            .find(|e| !e.is_empty() && !e.starts_with(LOCKED_EMAIL_PREFIX))
    }
}

#[async_trait]
impl EmailFinder for ApolloEmailFinder {
    async fn find_email(&self, name: &str, domain: &str) -> Result<Option<String>, DomainError> {
        let request = ApiRequest {
            q_organization_domains: vec![domain],
            q_names: vec![name],
            page: 1,
        };

        let response = self
            .client
            .post(&self.url)
            .header("x-api-key", &self.api_key)
            .header("Cache-Control", "no-cache")
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::upstream(format!("Apollo: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Apollo: API returned {status}: {body}");
            return Err(DomainError::upstream(format!("Apollo: API returned {status}")));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| DomainError::upstream(format!("Apollo: failed to parse response: {e}")))?;

        let email = Self::best_email(api_response);
        debug!("Apollo: {} at {} -> {:?}", name, domain, email);
        Ok(email)
    }

    fn provider_name(&self) -> &str {
        "apollo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ApiResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn best_email_prefers_person() {
        let response = parse(
            r#"{"person": {"email": "jane@acme.com"}, "people": [{"email": "other@acme.com"}]}"#,
        );
        assert_eq!(ApolloEmailFinder::best_email(response).as_deref(), Some("jane@acme.com"));
    }

    #[test]
    fn best_email_falls_back_to_people() {
        let response = parse(r#"{"people": [{"email": null}, {"email": "bob@acme.com"}]}"#);
        assert_eq!(ApolloEmailFinder::best_email(response).as_deref(), Some("bob@acme.com"));
    }

    #[test]
    fn best_email_ignores_locked_placeholders() {
        let response = parse(r#"{"people": [{"email": "email_not_unlocked@domain.com"}]}"#);
        assert_eq!(ApolloEmailFinder::best_email(response), None);
    }

    #[test]
    fn best_email_is_none_for_empty_response() {
        assert_eq!(ApolloEmailFinder::best_email(parse("{}")), None);
    }
}
