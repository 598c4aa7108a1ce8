use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::application::SearchProvider;
use crate::domain::{DomainError, Platform, Profile};

const FIRST_NAMES: [&str; 6] = ["Ada", "Grace", "Linus", "Margaret", "Dennis", "Barbara"];
const LAST_NAMES: [&str; 6] = ["Lovelace", "Hopper", "Torvalds", "Hamilton", "Ritchie", "Liskov"];
const COMPANIES: [&str; 4] = ["Acme Corp", "Initech", "Globex", "Hooli"];

#[derive(Clone)]
enum Scripted {
    Results(Vec<Profile>),
    NoResults,
    Failure(String),
}

/// Offline [`SearchProvider`] producing deterministic profiles per keyword.
///
/// Individual platforms can be scripted to return fixed results, nothing, or
/// an upstream failure.
pub struct MockSearchProvider {
    result_count: usize,
    scripted: HashMap<Platform, Scripted>,
    calls: AtomicUsize,
    last_keywords: Mutex<Option<String>>,
}

impl MockSearchProvider {
    pub fn new() -> Self {
        Self {
            result_count: 3,
            scripted: HashMap::new(),
            calls: AtomicUsize::new(0),
            last_keywords: Mutex::new(None),
        }
    }

    pub fn with_result_count(mut self, count: usize) -> Self {
        self.result_count = count;
        self
    }

    pub fn with_results(mut self, platform: Platform, profiles: Vec<Profile>) -> Self {
        self.scripted.insert(platform, Scripted::Results(profiles));
        self
    }

    pub fn with_no_results(mut self, platform: Platform) -> Self {
        self.scripted.insert(platform, Scripted::NoResults);
        self
    }

    pub fn with_failure(mut self, platform: Platform, message: impl Into<String>) -> Self {
        self.scripted.insert(platform, Scripted::Failure(message.into()));
        self
    }

    /// Number of searches issued so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_keywords(&self) -> Option<String> {
        self.last_keywords.lock().ok().and_then(|k| k.clone())
    }

    fn generate(&self, keywords: &str, platform: Platform) -> Vec<Profile> {
        let mut hasher = DefaultHasher::new();
        keywords.hash(&mut hasher);
        let seed = hasher.finish() as usize;

        (0..self.result_count)
            .map(|i| {
                let first = FIRST_NAMES[(seed + i) % FIRST_NAMES.len()];
                let last = LAST_NAMES[(seed / 7 + i) % LAST_NAMES.len()];
                let company = COMPANIES[(seed / 13 + i) % COMPANIES.len()];
                let handle = format!("{}{}{}", first, last, i).to_lowercase();
                let url = match platform {
                    Platform::Linkedin => format!("https://www.linkedin.com/in/{handle}"),
                    Platform::Twitter => format!("https://twitter.com/{handle}"),
                    Platform::Instagram => format!("https://www.instagram.com/{handle}/"),
                };
                Profile::new(
                    format!("{first} {last} - {company}"),
                    first,
                    last,
                    url,
                    platform,
                    Some(format!("{keywords} at {company}")),
                )
            })
            .collect()
    }
}

impl Default for MockSearchProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchProvider for MockSearchProvider {
    async fn search(&self, keywords: &str, platform: Platform) -> Result<Vec<Profile>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_keywords.lock() {
            *last = Some(keywords.to_string());
        }

        let profiles = match self.scripted.get(&platform).cloned() {
            Some(Scripted::Results(profiles)) => profiles,
            Some(Scripted::NoResults) => Vec::new(),
            Some(Scripted::Failure(message)) => return Err(DomainError::upstream(message)),
            None => self.generate(keywords, platform),
        };

        debug!("Mock search on {} returned {} profiles", platform, profiles.len());
        if profiles.is_empty() {
            return Err(DomainError::not_found(format!("No results found on {}", platform)));
        }
        Ok(profiles)
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}
