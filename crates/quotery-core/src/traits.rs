use std::future::Future;
use std::time::Duration;

use crate::error::AppError;
use crate::models::{NewQuote, Quote};

/// Durable table of quotes keyed by a store-assigned integer id.
///
/// Update and delete report rows affected (0 or 1) so callers can map a
/// miss to a not-found response without a prior lookup.
pub trait QuoteStore: Send + Sync + Clone {
    /// Insert one quote. Returns the newly assigned id.
    fn insert(&self, quote: &NewQuote) -> impl Future<Output = Result<i64, AppError>> + Send;

    /// Insert a batch as a single commit unit. Returns assigned ids in
    /// input order.
    fn insert_batch(
        &self,
        quotes: &[NewQuote],
    ) -> impl Future<Output = Result<Vec<i64>, AppError>> + Send;

    /// Look up a quote by id.
    fn get(&self, id: i64) -> impl Future<Output = Result<Option<Quote>, AppError>> + Send;

    /// All quotes, in insertion-stable order.
    fn list(&self) -> impl Future<Output = Result<Vec<Quote>, AppError>> + Send;

    /// Replace all three content fields of the quote with this id.
    fn update(
        &self,
        id: i64,
        quote: &NewQuote,
    ) -> impl Future<Output = Result<u64, AppError>> + Send;

    /// Remove the quote with this id.
    fn delete(&self, id: i64) -> impl Future<Output = Result<u64, AppError>> + Send;

    /// Drop and recreate the backing table. Every ingestion run starts here.
    fn reset(&self) -> impl Future<Output = Result<(), AppError>> + Send;
}

/// One rendered listing page inside a live browser session.
///
/// The ingestion pipeline owns exactly one of these per run and drives it
/// strictly sequentially.
pub trait PageSource: Send {
    /// The fully rendered DOM of the current page.
    fn content(&self) -> impl Future<Output = Result<String, AppError>> + Send;

    /// Poll until an element matching `selector` is present, up to
    /// `timeout`. Returns `false` if it never appeared; absence is not an
    /// error.
    fn wait_for(
        &self,
        selector: &str,
        timeout: Duration,
    ) -> impl Future<Output = Result<bool, AppError>> + Send;

    /// Locate and activate the next-page control. Returns `false` when the
    /// control is absent, which is the normal end-of-data condition.
    fn advance(&self) -> impl Future<Output = Result<bool, AppError>> + Send;

    /// Release the rendering session. Called on success and failure alike.
    fn close(self) -> impl Future<Output = Result<(), AppError>> + Send;
}
