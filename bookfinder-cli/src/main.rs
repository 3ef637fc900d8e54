//! Bookfinder CLI - search the Open Library catalog from the terminal

mod commands;

use anyhow::Result;
use bookfinder_core::SortKey;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse and validate the sort key argument
fn parse_sort_key(s: &str) -> Result<SortKey, String> {
    SortKey::parse(s).ok_or_else(|| format!("'{}' is not a valid sort key (title, year, language)", s))
}

/// Parse and validate the page argument (must be at least 1)
fn parse_page(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("page must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

#[derive(Parser)]
#[command(name = "bookfinder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog by title
    Search {
        /// Title to search for
        query: String,

        /// Sort key (title, year, language)
        #[arg(short, long, default_value = "title", value_parser = parse_sort_key)]
        sort: SortKey,

        /// Language filter, a 3-letter code (see `languages`)
        #[arg(short, long)]
        language: Option<String>,

        /// Page of results to show (must be at least 1)
        #[arg(short, long, default_value = "1", value_parser = parse_page)]
        page: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the known language filter codes
    Languages {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "bookfinder_cli=debug,bookfinder_core=debug"
    } else {
        "bookfinder_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Search {
            query,
            sort,
            language,
            page,
            json,
        } => commands::search(&query, sort, language.as_deref(), page, json).await,

        Commands::Languages { json } => commands::languages(json),
    }
}
