//! CLI Adapter.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, GameSummary, SteamInfo};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "steaminfo")]
#[command(version)]
#[command(about = "Look up Steam review summaries by game title", long_about = None)]
struct Cli {
    /// Config file (defaults to ./steaminfo.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Override the app list cache location
    #[arg(long, global = true)]
    cache: Option<PathBuf>,
    /// Log level for stderr diagnostics (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the review summary for a game
    #[clap(visible_alias = "s")]
    Summary {
        /// Exact game title (case-sensitive)
        name: String,
        /// Print the full summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the app id for a game
    #[clap(visible_alias = "l")]
    Lookup {
        /// Exact game title (case-sensitive)
        name: String,
    },
    /// Refetch the app list and rewrite the cache
    Refresh,
}

pub fn run() {
    let cli = Cli::parse();
    initialize_tracing(&cli.log_level);

    let result = execute(cli);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn execute(cli: Cli) -> Result<(), AppError> {
    let mut config = api::load_config(cli.config.as_deref())?;
    if let Some(cache) = cli.cache {
        config.cache.path = cache;
    }
    config.validate()?;

    let mut steaminfo = SteamInfo::open(&config)?;

    match cli.command {
        Commands::Summary { name, json } => {
            let result = steaminfo.summary(&name)?;
            if json {
                let rendered = serde_json::to_string_pretty(&result.summary).map_err(|e| {
                    AppError::SummaryUnavailable(format!("Failed to render summary: {}", e))
                })?;
                println!("{}", rendered);
            } else {
                print_summary(&result);
            }
        }
        Commands::Lookup { name } => {
            println!("{}", steaminfo.lookup(&name)?);
        }
        Commands::Refresh => {
            let catalog = steaminfo.refresh()?;
            println!("✅ Cached {} apps at {}", catalog.len(), config.cache.path.display());
        }
    }

    Ok(())
}

fn print_summary(result: &GameSummary) {
    let query = &result.summary.query_summary;
    println!("{} (app {})", result.name, result.app_id);
    println!("  Rating: {}", query.review_score_desc);
    match query.positive_ratio() {
        Some(ratio) => println!(
            "  Reviews: {} positive / {} negative of {} ({:.1}% positive)",
            query.total_positive, query.total_negative, query.total_reviews, ratio
        ),
        None => println!("  Reviews: none"),
    }
}

/// Diagnostics go to stderr; `RUST_LOG` takes precedence over `--log-level`.
fn initialize_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("steaminfo={}", log_level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
