use anyhow::Result;

use crate::domain::DomainEmail;

use super::super::Container;

pub struct EmailController<'a> {
    container: &'a Container,
}

impl<'a> EmailController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn find_email(&self, name: String, domain: String) -> Result<String> {
        let use_case = self.container.find_email_use_case();
        let email = use_case.execute(&name, &domain).await?;

        Ok(match email {
            Some(email) => email,
            None => format!("No email found for {} at {}", name, domain),
        })
    }

    pub async fn domain_emails(&self, domain: String) -> Result<String> {
        let use_case = self.container.find_domain_emails_use_case();
        let emails = use_case.execute(&domain).await?;

        Ok(match emails {
            Some(emails) => self.format_domain_emails(&domain, &emails),
            None => format!("No emails found for {}", domain),
        })
    }

    fn format_domain_emails(&self, domain: &str, emails: &[DomainEmail]) -> String {
        let mut output = format!("{} emails known for {}:\n\n", emails.len(), domain);

        for email in emails {
            output.push_str(&format!("  {}", email.value));

            let name = [email.first_name.as_deref(), email.last_name.as_deref()]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" ");
            if !name.is_empty() {
                output.push_str(&format!("  {}", name));
            }
            if let Some(position) = &email.position {
                output.push_str(&format!(" ({})", position));
            }
            if let Some(confidence) = email.confidence {
                output.push_str(&format!("  [{}%]", confidence));
            }
            output.push('\n');
        }

        output
    }
}
