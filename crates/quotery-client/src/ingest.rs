use std::time::Duration;

use quotery_core::error::AppError;
use quotery_core::traits::{PageSource, QuoteStore};

use crate::extract::{QUOTE_SELECTOR, extract_quotes};

/// Default listing: quotes.toscrape.com rendered client-side.
pub const DEFAULT_START_URL: &str = "http://quotes.toscrape.com/js/";

/// Page ceiling matching the depth of the default listing.
pub const DEFAULT_MAX_PAGES: u32 = 5;

/// Upper bound on waiting for a page to render its quote containers.
pub const DEFAULT_SETTLE_TIMEOUT: Duration = Duration::from_secs(10);

/// Tuning for one ingestion run.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    pub start_url: String,
    /// Hard ceiling on pages visited; traversal may stop earlier when the
    /// next-page control disappears.
    pub max_pages: u32,
    /// Readiness budget per page. The pipeline polls for a quote container
    /// instead of sleeping a fixed interval; a page that never renders one
    /// simply contributes zero candidates.
    pub settle_timeout: Duration,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            start_url: DEFAULT_START_URL.to_string(),
            max_pages: DEFAULT_MAX_PAGES,
            settle_timeout: DEFAULT_SETTLE_TIMEOUT,
        }
    }
}

/// What one run accomplished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestReport {
    pub pages_visited: u32,
    pub quotes_ingested: u64,
}

/// Orchestrates the full ingestion pipeline: reset the store, then per
/// page: settle → extract → commit, advancing until the page budget or
/// the end of the listing.
///
/// Generic over the page session and the store via traits, enabling
/// dependency injection and testability without a browser or a database.
pub struct IngestService<S: QuoteStore> {
    store: S,
    config: IngestConfig,
}

impl<S: QuoteStore> IngestService<S> {
    pub fn new(store: S, config: IngestConfig) -> Self {
        Self { store, config }
    }

    /// Run the pipeline over an open page session.
    ///
    /// The store is rebuilt from scratch (drop + recreate), so the final
    /// contents mirror the listing regardless of what was there before.
    /// The session is released on every exit path; any failure after that
    /// propagates to the caller.
    pub async fn run<P: PageSource>(&self, source: P) -> Result<IngestReport, AppError> {
        let outcome = self.drive(&source).await;

        if let Err(e) = source.close().await {
            tracing::warn!(error = %e, "Failed to release rendering session");
        }

        outcome
    }

    async fn drive<P: PageSource>(&self, source: &P) -> Result<IngestReport, AppError> {
        self.store.reset().await?;

        let mut report = IngestReport {
            pages_visited: 0,
            quotes_ingested: 0,
        };

        for page in 1..=self.config.max_pages {
            tracing::info!(page, "Loading listing page");

            if !source
                .wait_for(QUOTE_SELECTOR, self.config.settle_timeout)
                .await?
            {
                tracing::warn!(page, "No quote container rendered within the settle budget");
            }

            let html = source.content().await?;
            let quotes = extract_quotes(&html);
            report.pages_visited = page;

            if quotes.is_empty() {
                tracing::info!(page, "Page yielded no quotes");
            } else {
                // One batch per page: the page is the commit unit.
                let ids = self.store.insert_batch(&quotes).await?;
                report.quotes_ingested += ids.len() as u64;
                tracing::info!(page, count = ids.len(), "Committed page");
            }

            if page < self.config.max_pages && !source.advance().await? {
                tracing::info!(page, "Next-page control not found; stopping");
                break;
            }
        }

        tracing::info!(
            pages = report.pages_visited,
            quotes = report.quotes_ingested,
            "Ingestion complete"
        );
        Ok(report)
    }
}
