use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::application::EmailFinder;
use crate::domain::DomainError;

/// Offline [`EmailFinder`] guessing `first.last@domain`.
pub struct MockEmailFinder {
    calls: AtomicUsize,
}

impl MockEmailFinder {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockEmailFinder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailFinder for MockEmailFinder {
    async fn find_email(&self, name: &str, domain: &str) -> Result<Option<String>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let local = name
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(".");
        if local.is_empty() || domain.is_empty() {
            return Ok(None);
        }
        Ok(Some(format!("{}@{}", local, domain.to_lowercase())))
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}
