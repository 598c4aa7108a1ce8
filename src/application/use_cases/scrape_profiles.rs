use std::sync::Arc;
use std::time::Instant;

use futures_util::future::try_join_all;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::application::{EmailFinder, ProfileRepository, SearchProvider};
use crate::domain::{derive_org, DomainError, Platform, Profile, ProfileDraft, ScrapedProfile};

/// One user-triggered scrape: keywords, the platforms to search, and whether
/// to look up emails for new profiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeRequest {
    keywords: String,
    platforms: Vec<Platform>,
    enrich_emails: bool,
}

impl ScrapeRequest {
    pub fn new(keywords: impl Into<String>, platforms: impl IntoIterator<Item = Platform>) -> Self {
        let mut selected: Vec<Platform> = Vec::new();
        for platform in platforms {
            if !selected.contains(&platform) {
                selected.push(platform);
            }
        }
        Self {
            keywords: keywords.into(),
            platforms: selected,
            enrich_emails: false,
        }
    }

    pub fn with_enrichment(mut self, enrich_emails: bool) -> Self {
        self.enrich_emails = enrich_emails;
        self
    }

    pub fn keywords(&self) -> &str {
        &self.keywords
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn enrich_emails(&self) -> bool {
        self.enrich_emails
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.keywords.trim().is_empty() {
            return Err(DomainError::invalid_input("Keywords are required"));
        }
        if self.platforms.is_empty() {
            return Err(DomainError::invalid_input("Select at least one platform"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScrapeOutcome {
    /// Rows inserted by this scrape, in search order.
    pub created: Vec<ScrapedProfile>,
    /// Rows that already existed and were left untouched.
    pub reused: Vec<ScrapedProfile>,
    /// Profiles skipped because a lookup or insert failed.
    pub failed: usize,
    /// Profiles returned by search across all platforms, before dedup.
    pub searched: usize,
}

impl ScrapeOutcome {
    /// Prepend the newly created rows to a previously loaded result list.
    pub fn prepend_to(&self, previous: Vec<ScrapedProfile>) -> Vec<ScrapedProfile> {
        let mut merged = self.created.clone();
        merged.extend(previous);
        merged
    }
}

enum ProfileStep {
    Created(ScrapedProfile),
    Reused(ScrapedProfile),
}

/// Turns keywords and a platform selection into persisted, deduplicated
/// profiles.
pub struct ScrapeProfilesUseCase {
    search_provider: Option<Arc<dyn SearchProvider>>,
    email_finder: Option<Arc<dyn EmailFinder>>,
    profile_repo: Arc<dyn ProfileRepository>,
    scrape_lock: Arc<Mutex<()>>,
    show_progress: bool,
}

impl ScrapeProfilesUseCase {
    pub fn new(
        search_provider: Option<Arc<dyn SearchProvider>>,
        email_finder: Option<Arc<dyn EmailFinder>>,
        profile_repo: Arc<dyn ProfileRepository>,
    ) -> Self {
        Self {
            search_provider,
            email_finder,
            profile_repo,
            scrape_lock: Arc::new(Mutex::new(())),
            show_progress: false,
        }
    }

    /// Share a lock with other use case instances so their scrapes never
    /// interleave their lookup/insert sequences.
    pub fn with_lock(mut self, lock: Arc<Mutex<()>>) -> Self {
        self.scrape_lock = lock;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub async fn execute(&self, request: &ScrapeRequest) -> Result<ScrapeOutcome, DomainError> {
        let (search_provider, email_finder) = self.require_credentials()?;
        request.validate()?;

        let _guard = self.scrape_lock.lock().await;
        let start_time = Instant::now();

        info!(
            "Scraping \"{}\" on {} platform(s) (enrich_emails={})",
            request.keywords(),
            request.platforms().len(),
            request.enrich_emails()
        );

        let query = request.keywords().to_lowercase();
        let per_platform = try_join_all(
            request
                .platforms()
                .iter()
                .map(|platform| Self::search_platform(search_provider, &query, *platform)),
        )
        .await?;
        let profiles: Vec<Profile> = per_platform.into_iter().flatten().collect();

        let mut outcome = ScrapeOutcome {
            searched: profiles.len(),
            ..Default::default()
        };
        info!("Search returned {} profiles", profiles.len());

        let progress_bar = if self.show_progress {
            let bar = ProgressBar::new(profiles.len() as u64);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .expect("Invalid progress bar template")
                    .progress_chars("#>-"),
            );
            bar
        } else {
            ProgressBar::hidden()
        };

        for profile in &profiles {
            progress_bar.set_message(profile.url.clone());

            match self.persist_profile(profile, request, email_finder).await {
                Ok(ProfileStep::Created(saved)) => outcome.created.push(saved),
                Ok(ProfileStep::Reused(existing)) => outcome.reused.push(existing),
                Err(e) => {
                    warn!("Failed to save profile {}: {}", profile.url, e);
                    outcome.failed += 1;
                }
            }
            progress_bar.inc(1);
        }
        progress_bar.finish_and_clear();

        info!(
            "Scrape finished in {:?}: {} new, {} existing, {} failed",
            start_time.elapsed(),
            outcome.created.len(),
            outcome.reused.len(),
            outcome.failed
        );

        Ok(outcome)
    }

    fn require_credentials(
        &self,
    ) -> Result<(&Arc<dyn SearchProvider>, &Arc<dyn EmailFinder>), DomainError> {
        match (&self.search_provider, &self.email_finder) {
            (Some(search), Some(finder)) => Ok((search, finder)),
            (search, finder) => {
                let mut missing = Vec::new();
                if search.is_none() {
                    missing.push("SERPAPI_KEY");
                }
                if finder.is_none() {
                    missing.push("APOLLO_API_KEY");
                }
                Err(DomainError::configuration(format!(
                    "API keys not configured: {}. Add them to the .env file.",
                    missing.join(", ")
                )))
            }
        }
    }

    async fn search_platform(
        provider: &Arc<dyn SearchProvider>,
        keywords: &str,
        platform: Platform,
    ) -> Result<Vec<Profile>, DomainError> {
        match provider.search(keywords, platform).await {
            Ok(profiles) => Ok(profiles),
            Err(DomainError::NotFound(msg)) => {
                info!("No results on {}: {}", platform, msg);
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    async fn persist_profile(
        &self,
        profile: &Profile,
        request: &ScrapeRequest,
        email_finder: &Arc<dyn EmailFinder>,
    ) -> Result<ProfileStep, DomainError> {
        if let Some(existing) = self.profile_repo.find_by_url(&profile.url).await? {
            debug!("Profile already stored: {}", profile.url);
            return Ok(ProfileStep::Reused(existing));
        }

        let org = derive_org(profile);
        let name = profile.full_name();
        debug!("Derived org \"{}\" for {}", org, profile.url);

        let email = if request.enrich_emails() {
            Self::enrich(email_finder, &name, &org).await
        } else {
            None
        };

        let draft = ProfileDraft::new(name, &profile.url, org, profile.platform, request.keywords())
            .with_email(email);

        match self.profile_repo.insert(&draft).await? {
            Some(saved) => Ok(ProfileStep::Created(saved)),
            None => {
                // Another writer stored the URL between lookup and insert.
                let existing = self
                    .profile_repo
                    .find_by_url(&profile.url)
                    .await?
                    .ok_or_else(|| {
                        DomainError::storage(format!(
                            "Insert of {} conflicted but no stored row was found",
                            profile.url
                        ))
                    })?;
                Ok(ProfileStep::Reused(existing))
            }
        }
    }

    async fn enrich(finder: &Arc<dyn EmailFinder>, name: &str, domain: &str) -> Option<String> {
        if domain.is_empty() {
            return None;
        }
        match finder.find_email(name, domain).await {
            Ok(email) => email,
            Err(e) => {
                warn!("Email lookup for {} at {} failed: {}", name, domain, e);
                None
            }
        }
    }
}
