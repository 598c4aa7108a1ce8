use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::{ScrapeRequest, SearchRequest, DEFAULT_EXPORT_FILE};
use crate::connector::api::Container;
use crate::domain::{DomainEmail, DomainError, Platform, Profile, ScrapedProfile};

use super::error::{
    ApiError, APOLLO_FAILED, HUNTER_FAILED, SCRAPE_FAILED, SEARCH_FAILED, STORE_FAILED,
};

type AppState = State<Arc<Container>>;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    keywords: Option<String>,
    platform: Option<String>,
}

pub async fn search(
    State(container): AppState,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Profile>>, ApiError> {
    let request = SearchRequest::parse(params.keywords.as_deref(), params.platform.as_deref())
        .map_err(|e| ApiError::from_domain(e, SEARCH_FAILED))?;

    let profiles = container
        .search_use_case()
        .execute(&request)
        .await
        .map_err(|e| ApiError::from_domain(e, SEARCH_FAILED))?;

    Ok(Json(profiles))
}

#[derive(Debug, Deserialize)]
pub struct SearchEmailBody {
    #[serde(default)]
    name: String,
    #[serde(default)]
    domain: String,
}

#[derive(Debug, Serialize)]
pub struct EmailResponse<T> {
    email: Option<T>,
}

pub async fn search_email(
    State(container): AppState,
    Json(body): Json<SearchEmailBody>,
) -> Result<Json<EmailResponse<String>>, ApiError> {
    let email = container
        .find_email_use_case()
        .execute(&body.name, &body.domain)
        .await
        .map_err(|e| ApiError::from_domain(e, APOLLO_FAILED))?;

    Ok(Json(EmailResponse { email }))
}

#[derive(Debug, Deserialize)]
pub struct FindEmailBody {
    #[serde(default)]
    domain: String,
}

pub async fn find_email(
    State(container): AppState,
    Json(body): Json<FindEmailBody>,
) -> Result<Json<EmailResponse<Vec<DomainEmail>>>, ApiError> {
    let email = container
        .find_domain_emails_use_case()
        .execute(&body.domain)
        .await
        .map_err(|e| ApiError::from_domain(e, HUNTER_FAILED))?;

    Ok(Json(EmailResponse { email }))
}

#[derive(Debug, Deserialize)]
pub struct ScrapeBody {
    #[serde(default)]
    keywords: String,
    #[serde(default)]
    platforms: Vec<String>,
    #[serde(default)]
    enrich_emails: bool,
}

#[derive(Debug, Serialize)]
pub struct ScrapeResponse {
    created: Vec<ScrapedProfile>,
    reused_count: usize,
    failed_count: usize,
}

pub async fn scrape(
    State(container): AppState,
    Json(body): Json<ScrapeBody>,
) -> Result<Json<ScrapeResponse>, ApiError> {
    let platforms = body
        .platforms
        .iter()
        .map(|p| p.parse::<Platform>())
        .collect::<Result<Vec<_>, DomainError>>()
        .map_err(|e| ApiError::from_domain(e, SCRAPE_FAILED))?;

    let request = ScrapeRequest::new(body.keywords, platforms).with_enrichment(body.enrich_emails);
    let outcome = container
        .scrape_use_case()
        .execute(&request)
        .await
        .map_err(|e| ApiError::from_domain(e, SCRAPE_FAILED))?;

    Ok(Json(ScrapeResponse {
        reused_count: outcome.reused.len(),
        failed_count: outcome.failed,
        created: outcome.created,
    }))
}

pub async fn list_profiles(
    State(container): AppState,
) -> Result<Json<Vec<ScrapedProfile>>, ApiError> {
    let profiles = container
        .list_use_case()
        .execute()
        .await
        .map_err(|e| ApiError::from_domain(e, STORE_FAILED))?;

    Ok(Json(profiles))
}

pub async fn export_profiles(State(container): AppState) -> Result<impl IntoResponse, ApiError> {
    let csv = container
        .export_use_case()
        .execute()
        .await
        .map_err(|e| ApiError::from_domain(e, STORE_FAILED))?;

    let disposition = format!("attachment; filename=\"{}\"", DEFAULT_EXPORT_FILE);
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    ))
}

pub async fn health() -> &'static str {
    "ok"
}
