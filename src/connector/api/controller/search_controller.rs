use anyhow::Result;

use crate::application::SearchRequest;
use crate::domain::{Platform, Profile};

use super::super::Container;

pub struct SearchController<'a> {
    container: &'a Container,
}

impl<'a> SearchController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn search(&self, keywords: String, platform: Platform) -> Result<String> {
        let request = SearchRequest::new(keywords, platform)?;
        let use_case = self.container.search_use_case();
        let profiles = use_case.execute(&request).await?;

        Ok(self.format_profiles(&profiles, platform))
    }

    fn format_profiles(&self, profiles: &[Profile], platform: Platform) -> String {
        let mut output = format!("Found {} {} profiles:\n\n", profiles.len(), platform);

        for (i, profile) in profiles.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, profile.full_name()));
            output.push_str(&format!("   {}\n", profile.url));
            if !profile.title.is_empty() {
                output.push_str(&format!("   Title: {}\n", profile.title));
            }
            output.push_str(&format!("   {}\n\n", profile.snippet));
        }

        output
    }
}
