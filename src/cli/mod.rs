use clap::Subcommand;

use crate::application::DEFAULT_EXPORT_FILE;
use crate::domain::Platform;

#[derive(Subcommand)]
pub enum Commands {
    /// Search the selected platforms and store every profile not seen before
    Scrape {
        keywords: String,

        /// Platform to search (linkedin, twitter, instagram); repeat for several
        #[arg(short = 'p', long = "platform", required = true)]
        platforms: Vec<Platform>,

        /// Look up an email address for each new profile
        #[arg(long)]
        enrich: bool,

        /// Also write the resulting list as CSV to this file
        #[arg(long)]
        export: Option<String>,
    },

    /// Run a single site-scoped search without storing anything
    Search {
        keywords: String,

        #[arg(short, long)]
        platform: Platform,
    },

    /// Find a person's email address at a domain
    Email { name: String, domain: String },

    /// List the email addresses known for a domain
    DomainEmails { domain: String },

    /// List stored profiles, newest first
    List,

    /// Export stored profiles as CSV
    Export {
        #[arg(short, long, default_value = DEFAULT_EXPORT_FILE)]
        output: String,
    },

    /// Start the HTTP API
    Serve {
        /// Port to listen on (defaults to $PORT, then 5001)
        #[arg(long)]
        port: Option<u16>,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,
    },
}
