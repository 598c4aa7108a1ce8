use anyhow::Result;

use crate::application::{render_csv, ScrapeOutcome, ScrapeRequest};
use crate::domain::Platform;

use super::super::Container;
use super::profiles_controller::format_profile_list;

pub struct ScrapeController<'a> {
    container: &'a Container,
}

impl<'a> ScrapeController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn scrape(
        &self,
        keywords: String,
        platforms: Vec<Platform>,
        enrich: bool,
        export: Option<String>,
    ) -> Result<String> {
        let request = ScrapeRequest::new(keywords, platforms).with_enrichment(enrich);

        let previous = self.container.list_use_case().execute().await?;
        let outcome = self.container.scrape_use_case().execute(&request).await?;

        let mut output = self.format_outcome(&outcome, request.platforms());

        if let Some(path) = export {
            let results = outcome.prepend_to(previous);
            tokio::fs::write(&path, render_csv(&results)).await?;
            output.push_str(&format!("\nExported {} profiles to {}\n", results.len(), path));
        }

        Ok(output)
    }

    fn format_outcome(&self, outcome: &ScrapeOutcome, platforms: &[Platform]) -> String {
        let names: Vec<_> = platforms.iter().map(|p| p.as_str()).collect();
        let mut output = format!(
            "Searched {} ({} results): {} new, {} already stored, {} failed\n",
            names.join(", "),
            outcome.searched,
            outcome.created.len(),
            outcome.reused.len(),
            outcome.failed
        );

        if !outcome.created.is_empty() {
            output.push('\n');
            output.push_str(&format_profile_list(&outcome.created));
        }

        output
    }
}
