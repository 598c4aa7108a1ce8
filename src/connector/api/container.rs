use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::application::{
    DomainEmailSearch, EmailFinder, ExportProfilesUseCase, FindDomainEmailsUseCase,
    FindEmailUseCase, ListProfilesUseCase, ProfileRepository, ScrapeProfilesUseCase,
    SearchProfilesUseCase, SearchProvider,
};
use crate::config::AppConfig;
use crate::connector::{
    ApolloEmailFinder, DuckdbProfileRepository, HunterDomainSearch, InMemoryProfileRepository,
    MockEmailFinder, MockSearchProvider, SerpApiSearchProvider, SupabaseProfileRepository,
};

/// Where scraped profiles are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileStore {
    #[default]
    DuckDb,
    InMemory,
    Supabase,
}

impl ProfileStore {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileStore::DuckDb => "duckdb",
            ProfileStore::InMemory => "memory",
            ProfileStore::Supabase => "supabase",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "duckdb" => ProfileStore::DuckDb,
            "memory" | "inmemory" | "in_memory" => ProfileStore::InMemory,
            "supabase" => ProfileStore::Supabase,
            unknown => {
                warn!("Unknown profile store '{}', defaulting to DuckDB", unknown);
                ProfileStore::DuckDb
            }
        }
    }
}

pub struct ContainerConfig {
    pub data_dir: String,
    pub store: ProfileStore,
    /// Use offline search and email providers instead of the real APIs.
    pub mock_providers: bool,
    /// Draw a progress bar while a scrape persists profiles.
    pub show_progress: bool,
    pub app: AppConfig,
}

pub struct Container {
    search_provider: Option<Arc<dyn SearchProvider>>,
    email_finder: Option<Arc<dyn EmailFinder>>,
    domain_email_search: Option<Arc<dyn DomainEmailSearch>>,
    profile_repo: Arc<dyn ProfileRepository>,
    scrape_lock: Arc<Mutex<()>>,
    config: ContainerConfig,
}

impl Container {
    pub async fn new(config: ContainerConfig) -> Result<Self> {
        let profile_repo: Arc<dyn ProfileRepository> = match config.store {
            ProfileStore::InMemory => {
                debug!("Using in-memory profile storage");
                Arc::new(InMemoryProfileRepository::new())
            }
            ProfileStore::Supabase => match config.app.supabase() {
                Some((url, key)) => {
                    debug!("Using Supabase profile storage at {}", url);
                    Arc::new(
                        SupabaseProfileRepository::new(url, key)
                            .with_unique_index(config.app.supabase_unique_profile_url),
                    )
                }
                None => bail!("Supabase storage needs SUPABASE_URL and SUPABASE_ANON_KEY"),
            },
            ProfileStore::DuckDb => {
                let db_path = PathBuf::from(&config.data_dir).join("leadscout.duckdb");
                match DuckdbProfileRepository::new(&db_path) {
                    Ok(duckdb) => {
                        debug!("Using DuckDB profile storage at {:?}", db_path);
                        Arc::new(duckdb)
                    }
                    Err(e) => {
                        warn!(
                            "Failed to initialize DuckDB ({}): {}. Falling back to in-memory storage.",
                            db_path.display(),
                            e
                        );
                        Arc::new(InMemoryProfileRepository::new())
                    }
                }
            }
        };

        let (search_provider, email_finder): (
            Option<Arc<dyn SearchProvider>>,
            Option<Arc<dyn EmailFinder>>,
        ) = if config.mock_providers {
            debug!("Using mock search and email providers");
            (
                Some(Arc::new(MockSearchProvider::new()) as Arc<dyn SearchProvider>),
                Some(Arc::new(MockEmailFinder::new()) as Arc<dyn EmailFinder>),
            )
        } else {
            (
                config.app.serpapi_key.as_ref().map(|key| {
                    Arc::new(SerpApiSearchProvider::new(key, &config.app.serpapi_base_url))
                        as Arc<dyn SearchProvider>
                }),
                config.app.apollo_api_key.as_ref().map(|key| {
                    Arc::new(ApolloEmailFinder::new(key, &config.app.apollo_base_url))
                        as Arc<dyn EmailFinder>
                }),
            )
        };

        let domain_email_search = config.app.hunter_api_key.as_ref().map(|key| {
            Arc::new(HunterDomainSearch::new(key, &config.app.hunter_base_url))
                as Arc<dyn DomainEmailSearch>
        });

        Ok(Self::from_parts(
            search_provider,
            email_finder,
            domain_email_search,
            profile_repo,
            config,
        ))
    }

    /// Assemble a container from already-built adapters.
    pub fn from_parts(
        search_provider: Option<Arc<dyn SearchProvider>>,
        email_finder: Option<Arc<dyn EmailFinder>>,
        domain_email_search: Option<Arc<dyn DomainEmailSearch>>,
        profile_repo: Arc<dyn ProfileRepository>,
        config: ContainerConfig,
    ) -> Self {
        Self {
            search_provider,
            email_finder,
            domain_email_search,
            profile_repo,
            scrape_lock: Arc::new(Mutex::new(())),
            config,
        }
    }

    pub fn search_use_case(&self) -> SearchProfilesUseCase {
        SearchProfilesUseCase::new(self.search_provider.clone())
    }

    pub fn find_email_use_case(&self) -> FindEmailUseCase {
        FindEmailUseCase::new(self.email_finder.clone())
    }

    pub fn find_domain_emails_use_case(&self) -> FindDomainEmailsUseCase {
        FindDomainEmailsUseCase::new(self.domain_email_search.clone())
    }

    pub fn scrape_use_case(&self) -> ScrapeProfilesUseCase {
        ScrapeProfilesUseCase::new(
            self.search_provider.clone(),
            self.email_finder.clone(),
            self.profile_repo.clone(),
        )
        .with_lock(self.scrape_lock.clone())
        .with_progress(self.config.show_progress)
    }

    pub fn list_use_case(&self) -> ListProfilesUseCase {
        ListProfilesUseCase::new(self.profile_repo.clone())
    }

    pub fn export_use_case(&self) -> ExportProfilesUseCase {
        ExportProfilesUseCase::new(self.profile_repo.clone())
    }

    pub fn data_dir(&self) -> &str {
        &self.config.data_dir
    }

    pub fn store(&self) -> ProfileStore {
        self.config.store
    }

    pub fn app_config(&self) -> &AppConfig {
        &self.config.app
    }
}
