use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use leadscout::connector::http;
use leadscout::{AppConfig, Commands, Container, ContainerConfig, ProfileStore, Router};

#[derive(Parser)]
#[command(name = "leadscout")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(short, long, global = true, default_value = "~/.leadscout")]
    data_dir: String,

    /// Profile storage: duckdb, memory or supabase
    #[arg(long, global = true, default_value = "duckdb")]
    store: String,

    /// Use offline search and email providers (no API keys needed)
    #[arg(long, global = true)]
    mock_providers: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let app_config = AppConfig::from_env();
    app_config.log_keys();

    let data_dir = expand_tilde(&cli.data_dir);
    let store = ProfileStore::from_str(&cli.store);
    if store == ProfileStore::DuckDb {
        std::fs::create_dir_all(&data_dir)?;
    }

    let serving = matches!(cli.command, Commands::Serve { .. });
    let config = ContainerConfig {
        data_dir,
        store,
        mock_providers: cli.mock_providers,
        show_progress: !serving,
        app: app_config,
    };
    let container = Container::new(config).await?;

    if let Commands::Serve { port, public } = cli.command {
        let host = if public {
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        } else {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        };
        let port = port.unwrap_or(container.app_config().port);

        info!("Starting HTTP API (store: {})", container.store().as_str());
        return http::serve(Arc::new(container), SocketAddr::new(host, port)).await;
    }

    let router = Router::new(&container);
    let output = router.route(cli.command).await?;
    println!("{}", output);

    Ok(())
}

fn expand_tilde(path: &str) -> String {
    if path == "~" || path.starts_with("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            if path == "~" {
                return home.to_string_lossy().to_string();
            }
            return path.replacen("~", &home.to_string_lossy(), 1);
        }
    }
    path.to_string()
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn scrape_requires_a_platform() {
        let res = Cli::try_parse_from(["leadscout", "scrape", "rust developer"]);
        assert!(res.is_err(), "scrape without -p should be rejected");
    }

    #[test]
    fn scrape_accepts_repeated_platforms() {
        let cli = Cli::try_parse_from([
            "leadscout", "scrape", "rust", "-p", "linkedin", "-p", "Twitter", "--enrich",
        ])
        .unwrap();
        match cli.command {
            Commands::Scrape {
                platforms, enrich, ..
            } => {
                assert_eq!(platforms.len(), 2);
                assert!(enrich);
            }
            _ => panic!("expected scrape command"),
        }
    }

    #[test]
    fn unknown_platform_is_rejected() {
        let res = Cli::try_parse_from(["leadscout", "search", "rust", "-p", "facebook"]);
        assert!(res.is_err());
    }

    #[test]
    fn expand_tilde_leaves_absolute_paths() {
        assert_eq!(expand_tilde("/tmp/leadscout"), "/tmp/leadscout");
    }
}
