use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use leadscout::connector::http::build_router;
use async_trait::async_trait;
use leadscout::{
    AppConfig, Container, ContainerConfig, DomainEmail, DomainEmailSearch, DomainError,
    EmailFinder, InMemoryProfileRepository, MockEmailFinder, MockSearchProvider, Platform,
    ProfileDraft, ProfileRepository, ProfileStore, SearchProvider,
};
use serde_json::{json, Value};
use tower::ServiceExt;

struct TestApp {
    router: axum::Router,
    search: Arc<MockSearchProvider>,
    repo: Arc<InMemoryProfileRepository>,
}

fn config() -> ContainerConfig {
    ContainerConfig {
        data_dir: String::new(),
        store: ProfileStore::InMemory,
        mock_providers: true,
        show_progress: false,
        app: AppConfig::default(),
    }
}

fn app_with(search: MockSearchProvider) -> TestApp {
    let search = Arc::new(search);
    let repo = Arc::new(InMemoryProfileRepository::new());
    let container = Container::from_parts(
        Some(search.clone() as Arc<dyn SearchProvider>),
        Some(Arc::new(MockEmailFinder::new()) as Arc<dyn EmailFinder>),
        None,
        repo.clone() as Arc<dyn ProfileRepository>,
        config(),
    );

    TestApp {
        router: build_router(Arc::new(container)),
        search,
        repo,
    }
}

fn app() -> TestApp {
    app_with(MockSearchProvider::new())
}

fn unconfigured_app() -> axum::Router {
    let container = Container::from_parts(
        None,
        None,
        None,
        Arc::new(InMemoryProfileRepository::new()),
        config(),
    );
    build_router(Arc::new(container))
}

/// Domain search returning a fixed answer for every domain.
struct FixedDomainSearch(Option<Vec<DomainEmail>>);

#[async_trait]
impl DomainEmailSearch for FixedDomainSearch {
    async fn find_domain_emails(&self, _domain: &str) -> Result<Option<Vec<DomainEmail>>, DomainError> {
        Ok(self.0.clone())
    }

    fn provider_name(&self) -> &str {
        "fixed"
    }
}

fn domain_search_app(emails: Option<Vec<DomainEmail>>) -> axum::Router {
    let container = Container::from_parts(
        None,
        None,
        Some(Arc::new(FixedDomainSearch(emails)) as Arc<dyn DomainEmailSearch>),
        Arc::new(InMemoryProfileRepository::new()),
        config(),
    );
    build_router(Arc::new(container))
}

async fn send(router: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_returns_ok() {
    let app = app();
    let response = app.router.clone().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn search_returns_profiles() {
    let app = app();
    let (status, body) = send(&app.router, get("/search?keywords=rust%20developer&platform=linkedin")).await;

    assert_eq!(status, StatusCode::OK);
    let profiles = body.as_array().expect("array");
    assert_eq!(profiles.len(), 3);
    for profile in profiles {
        assert_eq!(profile["platform"], "linkedin");
        for field in ["title", "first_name", "last_name", "url", "snippet"] {
            assert!(profile.get(field).is_some(), "missing {field}");
        }
    }
}

#[tokio::test]
async fn search_missing_parameters_is_bad_request_without_provider_call() {
    let app = app();

    for uri in ["/search", "/search?keywords=rust", "/search?platform=linkedin", "/search?keywords=%20&platform=twitter"] {
        let (status, body) = send(&app.router, get(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, json!({ "error": "Missing required parameters" }));
    }
    assert_eq!(app.search.calls(), 0);
}

#[tokio::test]
async fn search_unknown_platform_is_bad_request() {
    let app = app();
    let (status, body) = send(&app.router, get("/search?keywords=rust&platform=facebook")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("facebook"));
    assert_eq!(app.search.calls(), 0);
}

#[tokio::test]
async fn search_without_results_is_not_found() {
    let app = app_with(MockSearchProvider::new().with_no_results(Platform::Twitter));
    let (status, body) = send(&app.router, get("/search?keywords=rust&platform=twitter")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "No results found" }));
}

#[tokio::test]
async fn search_upstream_failure_is_generic_server_error() {
    let app = app_with(MockSearchProvider::new().with_failure(Platform::Linkedin, "HTTP 502"));
    let (status, body) = send(&app.router, get("/search?keywords=rust&platform=linkedin")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "SerpAPI request failed" }));
}

#[tokio::test]
async fn search_email_returns_address() {
    let app = app();
    let (status, body) = send(
        &app.router,
        post_json("/api/search-email", json!({ "name": "Jane Doe", "domain": "acme.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "email": "jane.doe@acme.com" }));
}

#[tokio::test]
async fn search_email_blank_input_is_bad_request() {
    let app = app();
    let (status, _) = send(
        &app.router,
        post_json("/api/search-email", json!({ "name": "", "domain": "acme.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unconfigured_email_routes_report_missing_keys() {
    let router = unconfigured_app();

    let (status, body) = send(
        &router,
        post_json("/api/search-email", json!({ "name": "Jane Doe", "domain": "acme.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Apollo API key is missing" }));

    let (status, body) = send(&router, post_json("/api/find-email", json!({ "domain": "acme.com" }))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Hunter.io API key is missing" }));
}

#[tokio::test]
async fn find_email_returns_domain_addresses() {
    let mut jane = DomainEmail::new("jane@acme.com");
    jane.kind = Some("personal".to_string());
    jane.confidence = Some(94);
    jane.extra.insert("seniority".to_string(), json!("executive"));
    let router = domain_search_app(Some(vec![jane, DomainEmail::new("info@acme.com")]));

    let (status, body) = send(&router, post_json("/api/find-email", json!({ "domain": "acme.com" }))).await;

    assert_eq!(status, StatusCode::OK);
    let emails = body["email"].as_array().expect("email array");
    assert_eq!(emails.len(), 2);
    assert_eq!(emails[0]["value"], "jane@acme.com");
    assert_eq!(emails[0]["type"], "personal");
    assert_eq!(emails[0]["confidence"], 94);
    assert_eq!(emails[0]["seniority"], "executive");
    assert_eq!(emails[1]["value"], "info@acme.com");
}

#[tokio::test]
async fn find_email_unknown_domain_is_null() {
    let router = domain_search_app(None);

    let (status, body) = send(&router, post_json("/api/find-email", json!({ "domain": "acme.com" }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "email": null }));
}

#[tokio::test]
async fn scrape_persists_and_reuses_profiles() {
    let app = app();
    let request = json!({ "keywords": "Rust Developer", "platforms": ["linkedin", "twitter"] });

    let (status, body) = send(&app.router, post_json("/api/scrape", request.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["created"].as_array().unwrap().len(), 6);
    assert_eq!(body["reused_count"], 0);
    assert_eq!(body["failed_count"], 0);
    assert_eq!(body["created"][0]["keywords"], "Rust Developer");
    assert_eq!(app.search.last_keywords().as_deref(), Some("rust developer"));

    let (status, body) = send(&app.router, post_json("/api/scrape", request)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["created"].as_array().unwrap().len(), 0);
    assert_eq!(body["reused_count"], 6);

    assert_eq!(app.repo.list().await.unwrap().len(), 6);
}

#[tokio::test]
async fn scrape_rejects_unknown_platform_and_empty_selection() {
    let app = app();

    let (status, _) = send(
        &app.router,
        post_json("/api/scrape", json!({ "keywords": "rust", "platforms": ["myspace"] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app.router,
        post_json("/api/scrape", json!({ "keywords": "rust", "platforms": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(app.search.calls(), 0);
}

#[tokio::test]
async fn scrape_without_keys_reports_configuration() {
    let router = unconfigured_app();
    let (status, body) = send(
        &router,
        post_json("/api/scrape", json!({ "keywords": "rust", "platforms": ["linkedin"] })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("SERPAPI_KEY"));
    assert!(message.contains("APOLLO_API_KEY"));
}

#[tokio::test]
async fn profiles_list_and_export() {
    let app = app();
    let draft = ProfileDraft::new(
        "Doe, Jane",
        "https://linkedin.com/in/janedoe",
        "Acme Corp",
        Platform::Linkedin,
        "rust",
    );
    app.repo.insert(&draft).await.unwrap();

    let (status, body) = send(&app.router, get("/api/profiles")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["profile_url"], "https://linkedin.com/in/janedoe");

    let response = app
        .router
        .clone()
        .oneshot(get("/api/profiles/export"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/csv"));
    assert!(response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .contains("scraped_results.csv"));

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let csv = String::from_utf8(bytes.to_vec()).unwrap();
    assert_eq!(
        csv,
        "Name,Email,Profile URL,Platform\n\"Doe, Jane\",,https://linkedin.com/in/janedoe,linkedin\n"
    );
}
