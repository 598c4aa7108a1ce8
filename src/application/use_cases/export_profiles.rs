use std::sync::Arc;

use tracing::info;

use crate::application::ProfileRepository;
use crate::domain::{DomainError, ScrapedProfile};

pub const CSV_HEADER: [&str; 4] = ["Name", "Email", "Profile URL", "Platform"];
pub const DEFAULT_EXPORT_FILE: &str = "scraped_results.csv";

/// Renders stored profiles as CSV.
pub struct ExportProfilesUseCase {
    profile_repo: Arc<dyn ProfileRepository>,
}

impl ExportProfilesUseCase {
    pub fn new(profile_repo: Arc<dyn ProfileRepository>) -> Self {
        Self { profile_repo }
    }

    /// CSV of every stored profile, newest first.
    pub async fn execute(&self) -> Result<String, DomainError> {
        let profiles = self.profile_repo.list().await?;
        info!("Exporting {} profiles as CSV", profiles.len());
        Ok(render_csv(&profiles))
    }
}

/// Render `profiles` as CSV, one `\n`-terminated record per line.
///
/// Fields containing a comma, quote or line break are quoted with inner
/// quotes doubled, so names like `"Doe, Jane"` stay in one column.
pub fn render_csv(profiles: &[ScrapedProfile]) -> String {
    let mut out = csv_record(&CSV_HEADER);
    for profile in profiles {
        out.push_str(&csv_record(&[
            profile.name(),
            profile.email().unwrap_or_default(),
            profile.profile_url(),
            profile.platform().as_str(),
        ]));
    }
    out
}

fn csv_record(fields: &[&str]) -> String {
    let mut line = fields
        .iter()
        .map(|f| escape_field(f))
        .collect::<Vec<_>>()
        .join(",");
    line.push('\n');
    line
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
