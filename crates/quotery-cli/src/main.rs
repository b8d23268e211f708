use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use url::Url;

use quotery_client::{BrowserPage, IngestConfig, IngestService};
use quotery_client::ingest::{DEFAULT_MAX_PAGES, DEFAULT_START_URL};
use quotery_db::{Database, DatabaseConfig, QuoteRepository};

#[derive(Parser)]
#[command(name = "quotery", version, about = "Quote catalog scraper and store")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rebuild the quote store from the paginated listing
    Ingest {
        /// Listing URL to start from
        #[arg(short, long, env = "QUOTERY_START_URL", default_value = DEFAULT_START_URL)]
        url: String,

        /// Maximum number of listing pages to visit
        #[arg(short, long, env = "QUOTERY_MAX_PAGES", default_value_t = DEFAULT_MAX_PAGES)]
        pages: u32,

        /// Per-page readiness budget in seconds
        #[arg(long, default_value_t = 10)]
        settle_timeout: u64,
    },

    /// Print every quote currently in the store
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Setup tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("quotery=info".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ingest {
            url,
            pages,
            settle_timeout,
        } => {
            let repo = connect_db().await?;
            cmd_ingest(&url, pages, settle_timeout, repo).await?;
        }
        Commands::List => {
            let repo = connect_db().await?;
            cmd_list(&repo).await?;
        }
    }

    Ok(())
}

/// Connect to SQLite using DATABASE_URL (defaults to `sqlite:quotes.db`).
async fn connect_db() -> Result<QuoteRepository> {
    let config = DatabaseConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    let db = Database::connect(&config)
        .await
        .context("Failed to connect to database")?;
    db.init().await.map_err(|e| anyhow::anyhow!(e))?;

    Ok(db.quote_repo())
}

async fn cmd_ingest(url: &str, pages: u32, settle_timeout: u64, repo: QuoteRepository) -> Result<()> {
    Url::parse(url).with_context(|| format!("Invalid listing URL: {url}"))?;

    let config = IngestConfig {
        start_url: url.to_string(),
        max_pages: pages,
        settle_timeout: Duration::from_secs(settle_timeout),
    };

    tracing::info!("Opening {}", config.start_url);
    let source = BrowserPage::open(&config.start_url)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;

    let report = IngestService::new(repo, config)
        .run(source)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;

    println!(
        "Ingested {} quotes from {} pages",
        report.quotes_ingested, report.pages_visited
    );

    Ok(())
}

async fn cmd_list(repo: &QuoteRepository) -> Result<()> {
    let quotes = repo.list().await.map_err(|e| anyhow::anyhow!(e))?;

    if quotes.is_empty() {
        println!("The store is empty. Run `quotery ingest` first.");
        return Ok(());
    }

    for quote in &quotes {
        if quote.tags.is_empty() {
            println!("[{}] “{}” — {}", quote.id, quote.text, quote.author);
        } else {
            println!(
                "[{}] “{}” — {} ({})",
                quote.id, quote.text, quote.author, quote.tags
            );
        }
    }

    println!("\nTotal: {} quotes", quotes.len());

    Ok(())
}
