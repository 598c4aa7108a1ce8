use tracing::info;

use crate::connector::{APOLLO_BASE_URL, HUNTER_BASE_URL, SERPAPI_BASE_URL};

pub const DEFAULT_PORT: u16 = 5001;

/// Provider credentials and endpoints, loaded from the environment.
///
/// Every value is optional: a missing key only disables the capability that
/// needs it (e.g. no `HUNTER_API_KEY` means `/api/find-email` reports a
/// configuration error while search keeps working).
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub serpapi_key: Option<String>,
    pub serpapi_base_url: String,

    pub apollo_api_key: Option<String>,
    pub apollo_base_url: String,

    pub hunter_api_key: Option<String>,
    pub hunter_base_url: String,

    pub supabase_url: Option<String>,
    pub supabase_anon_key: Option<String>,
    /// The hosted table has a unique index on `profileUrl`.
    pub supabase_unique_profile_url: bool,

    pub port: u16,
}

impl AppConfig {
    /// Read the process environment, after loading a `.env` file if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            serpapi_key: var("SERPAPI_KEY"),
            serpapi_base_url: var("SERPAPI_BASE_URL").unwrap_or_else(|| SERPAPI_BASE_URL.to_string()),
            apollo_api_key: var("APOLLO_API_KEY"),
            apollo_base_url: var("APOLLO_BASE_URL").unwrap_or_else(|| APOLLO_BASE_URL.to_string()),
            hunter_api_key: var("HUNTER_API_KEY"),
            hunter_base_url: var("HUNTER_BASE_URL").unwrap_or_else(|| HUNTER_BASE_URL.to_string()),
            supabase_url: var("SUPABASE_URL"),
            supabase_anon_key: var("SUPABASE_ANON_KEY"),
            supabase_unique_profile_url: var("SUPABASE_UNIQUE_PROFILE_URL")
                .is_some_and(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes")),
            port: var("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }

    pub fn supabase(&self) -> Option<(&str, &str)> {
        match (&self.supabase_url, &self.supabase_anon_key) {
            (Some(url), Some(key)) => Some((url.as_str(), key.as_str())),
            _ => None,
        }
    }

    /// Log which credentials are present, never their values.
    pub fn log_keys(&self) {
        fn status(val: &Option<String>) -> &'static str {
            if val.is_some() {
                "<set>"
            } else {
                "<not set>"
            }
        }

        info!("Config loaded:");
        info!("  SERPAPI_KEY: {}", status(&self.serpapi_key));
        info!("  APOLLO_API_KEY: {}", status(&self.apollo_api_key));
        info!("  HUNTER_API_KEY: {}", status(&self.hunter_api_key));
        info!("  SUPABASE_URL: {}", status(&self.supabase_url));
        info!("  SUPABASE_ANON_KEY: {}", status(&self.supabase_anon_key));
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = config(&[]);
        assert!(config.serpapi_key.is_none());
        assert_eq!(config.serpapi_base_url, SERPAPI_BASE_URL);
        assert_eq!(config.apollo_base_url, APOLLO_BASE_URL);
        assert_eq!(config.hunter_base_url, HUNTER_BASE_URL);
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.supabase().is_none());
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = config(&[("SERPAPI_KEY", "  "), ("APOLLO_API_KEY", "key")]);
        assert!(config.serpapi_key.is_none());
        assert_eq!(config.apollo_api_key.as_deref(), Some("key"));
    }

    #[test]
    fn test_supabase_needs_url_and_key() {
        let partial = config(&[("SUPABASE_URL", "https://x.supabase.co")]);
        assert!(partial.supabase().is_none());

        let full = config(&[
            ("SUPABASE_URL", "https://x.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
        ]);
        assert_eq!(full.supabase(), Some(("https://x.supabase.co", "anon")));
    }

    #[test]
    fn test_unique_profile_url_flag() {
        assert!(!config(&[]).supabase_unique_profile_url);
        assert!(!config(&[("SUPABASE_UNIQUE_PROFILE_URL", "no")]).supabase_unique_profile_url);
        assert!(config(&[("SUPABASE_UNIQUE_PROFILE_URL", "TRUE")]).supabase_unique_profile_url);
    }

    #[test]
    fn test_invalid_port_falls_back_to_default() {
        assert_eq!(config(&[("PORT", "abc")]).port, DEFAULT_PORT);
        assert_eq!(config(&[("PORT", "8080")]).port, 8080);
    }
}
