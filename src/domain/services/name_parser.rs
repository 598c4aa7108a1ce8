use std::sync::LazyLock;

use regex::Regex;

use crate::domain::UNKNOWN_FIRST_NAME;

/// Search results carry the display name in their `source` field, after a
/// middle dot: `"LinkedIn · Jane Doe"`.
static SOURCE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"·\s*([\w'-]+)\s+(.+)").expect("valid name pattern"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName {
    pub first_name: String,
    pub last_name: String,
}

impl PersonName {
    pub fn unknown() -> Self {
        Self {
            first_name: UNKNOWN_FIRST_NAME.to_string(),
            last_name: String::new(),
        }
    }
}

/// Extract a first/last name split from a provider `source` string.
///
/// Anything that does not match yields `Unknown` with an empty last name.
pub fn extract_name_from_source(source: Option<&str>) -> PersonName {
    source
        .and_then(|s| SOURCE_NAME.captures(s))
        .map(|caps| PersonName {
            first_name: caps[1].to_string(),
            last_name: caps[2].to_string(),
        })
        .unwrap_or_else(PersonName::unknown)
}
