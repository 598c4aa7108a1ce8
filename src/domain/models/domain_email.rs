use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An address known for a domain, as reported by a domain-search provider.
///
/// Fields without a typed counterpart (sources, verification, seniority and
/// the like) are kept in `extra` and written back out unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainEmail {
    pub value: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub confidence: Option<u32>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DomainEmail {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: None,
            confidence: None,
            first_name: None,
            last_name: None,
            position: None,
            extra: Map::new(),
        }
    }
}
