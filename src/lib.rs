pub mod api;
pub mod config;
pub mod export;
pub mod model;
pub mod search;
pub mod store;
pub mod ui;

use anyhow::Result;
use clap::{Parser, Subcommand};

use api::DirectoryClient;
use config::AppConfig;
use export::ExportFormat;
use search::filter::filter_advocates;
use store::{AdvocateStore, LoadState};

/// Command-line interface.
#[derive(Parser, Debug)]
#[command(
    name = "advocate-search",
    version,
    about = "Terminal directory of advocates with client-side multi-field search"
)]
pub struct Cli {
    /// Directory endpoint URL (overrides the config file)
    #[arg(long, env = "ADVOCATE_API_URL")]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch interactive TUI
    Tui,
    /// Fetch the advocate list, apply an optional query, and print it
    List {
        /// Free-text query matched against every column
        #[arg(long, short)]
        query: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = ExportFormat::Table)]
        format: ExportFormat,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let client = DirectoryClient::new(resolve_url(cli.url)?);

    match cli.command {
        Commands::Tui => ui::tui::run_tui(client),
        Commands::List { query, format } => {
            run_list(client, query.unwrap_or_default(), format).await
        }
    }
}

/// The effective endpoint: flag or env var first, then the config file
/// (which falls back to its built-in default).
fn resolve_url(override_url: Option<String>) -> Result<String> {
    if let Some(url) = override_url {
        return Ok(url);
    }
    Ok(AppConfig::load()?.api_url)
}

async fn run_list(client: DirectoryClient, query: String, format: ExportFormat) -> Result<()> {
    let mut store = AdvocateStore::new();
    store.load(&client).await;

    match store.state() {
        LoadState::Ready(advocates) => {
            let filtered = filter_advocates(advocates, &query);
            if filtered.is_empty() && !query.is_empty() {
                println!("No advocates found matching \"{query}\".");
                return Ok(());
            }
            print!("{}", export::render(&filtered, format)?);
            Ok(())
        }
        LoadState::Error(message) => anyhow::bail!("{message}"),
        LoadState::Loading => anyhow::bail!("load did not complete"),
    }
}
