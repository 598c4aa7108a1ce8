use serde::{Deserialize, Serialize};

use super::Platform;

pub const UNKNOWN_FIRST_NAME: &str = "Unknown";
pub const MISSING_SNIPPET: &str = "No description available";

/// A single search hit, normalized from the search provider's response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    pub url: String,
    pub platform: Platform,
    pub snippet: String,
}

impl Profile {
    pub fn new(
        title: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        url: impl Into<String>,
        platform: Platform,
        snippet: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            url: url.into(),
            platform,
            snippet: snippet
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| MISSING_SNIPPET.to_string()),
        }
    }

    /// "First Last", without a trailing space when the last name is unknown.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
