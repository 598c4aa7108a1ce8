use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Social platform a profile was scraped from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linkedin,
    Twitter,
    Instagram,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Linkedin, Platform::Twitter, Platform::Instagram];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Linkedin => "linkedin",
            Platform::Twitter => "twitter",
            Platform::Instagram => "instagram",
        }
    }

    /// The `site:` scope used to restrict web search to profile pages.
    pub fn site_scope(&self) -> &'static str {
        match self {
            Platform::Linkedin => "linkedin.com/in",
            Platform::Twitter => "twitter.com",
            Platform::Instagram => "instagram.com",
        }
    }
}

impl FromStr for Platform {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linkedin" => Ok(Platform::Linkedin),
            "twitter" => Ok(Platform::Twitter),
            "instagram" => Ok(Platform::Instagram),
            other => Err(DomainError::invalid_input(format!(
                "Unsupported platform '{}' (expected linkedin, twitter or instagram)",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
