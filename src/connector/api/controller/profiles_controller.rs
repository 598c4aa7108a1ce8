use anyhow::Result;

use crate::domain::ScrapedProfile;

use super::super::Container;

pub struct ProfilesController<'a> {
    container: &'a Container,
}

impl<'a> ProfilesController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn list(&self) -> Result<String> {
        let use_case = self.container.list_use_case();
        let profiles = use_case.execute().await?;
        Ok(format_profile_list(&profiles))
    }

    pub async fn export(&self, output: String) -> Result<String> {
        let use_case = self.container.export_use_case();
        let csv = use_case.execute().await?;
        let rows = csv.lines().count().saturating_sub(1);

        tokio::fs::write(&output, csv).await?;
        Ok(format!("Exported {} profiles to {}", rows, output))
    }
}

pub(super) fn format_profile_list(profiles: &[ScrapedProfile]) -> String {
    if profiles.is_empty() {
        return "No profiles stored.".to_string();
    }

    let mut output = format!("{} stored profiles:\n\n", profiles.len());
    for profile in profiles {
        output.push_str(&format!("  {}\n", profile.summary()));
        if let Some(email) = profile.email() {
            output.push_str(&format!("    Email: {}\n", email));
        }
        output.push_str(&format!(
            "    Keywords: {}, Scraped: {}\n",
            profile.keywords(),
            profile.created_at().format("%Y-%m-%d %H:%M")
        ));
    }

    output
}
