pub mod application;
pub mod cli;
pub mod config;
pub mod connector;
pub mod domain;

pub use cli::Commands;
pub use config::AppConfig;

pub use application::{
    DomainEmailSearch, EmailFinder, ProfileRepository, SearchProvider, ExportProfilesUseCase,
    FindDomainEmailsUseCase, FindEmailUseCase, ListProfilesUseCase, ScrapeOutcome,
    ScrapeProfilesUseCase, ScrapeRequest, SearchProfilesUseCase, SearchRequest,
};

pub use connector::{
    ApolloEmailFinder, Container, ContainerConfig, DuckdbProfileRepository, HunterDomainSearch,
    InMemoryProfileRepository, MockEmailFinder, MockSearchProvider, ProfileStore, Router,
    SerpApiSearchProvider, SupabaseProfileRepository,
};

pub use domain::{
    DomainEmail, DomainError, Platform, Profile, ProfileDraft, ScrapedProfile,
};
