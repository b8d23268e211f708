//! Test utilities: handwritten in-memory implementations of the core traits.
//!
//! Used for dependency injection in unit tests across the workspace, so the
//! ingestion pipeline and access layer can be exercised without a browser or
//! a database. All doubles use `Arc<Mutex<_>>` for interior mutability,
//! allowing assertions on recorded state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::AppError;
use crate::models::{NewQuote, Quote};
use crate::traits::{PageSource, QuoteStore};

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-memory quote store with auto-assigned ids.
///
/// Mirrors the durable store's identity semantics: ids ascend in insertion
/// order and are never reused, even across `reset`.
#[derive(Clone)]
pub struct MemoryStore {
    rows: Arc<Mutex<Vec<Quote>>>,
    next_id: Arc<Mutex<i64>>,
    insert_error: Arc<Mutex<Option<AppError>>>,
}

impl MemoryStore {
    pub fn empty() -> Self {
        Self {
            rows: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(Mutex::new(1)),
            insert_error: Arc::new(Mutex::new(None)),
        }
    }

    /// Store whose next insert fails with the given error.
    pub fn with_insert_error(error: AppError) -> Self {
        Self {
            rows: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(Mutex::new(1)),
            insert_error: Arc::new(Mutex::new(Some(error))),
        }
    }

    /// Snapshot of the current rows.
    pub fn rows(&self) -> Vec<Quote> {
        self.rows.lock().unwrap().clone()
    }

    fn assign_id(&self) -> i64 {
        let mut next = self.next_id.lock().unwrap();
        let id = *next;
        *next += 1;
        id
    }
}

impl QuoteStore for MemoryStore {
    async fn insert(&self, quote: &NewQuote) -> Result<i64, AppError> {
        let mut err = self.insert_error.lock().unwrap();
        if let Some(e) = err.take() {
            return Err(e);
        }
        drop(err);

        let id = self.assign_id();
        self.rows.lock().unwrap().push(quote.clone().into_quote(id));
        Ok(id)
    }

    async fn insert_batch(&self, quotes: &[NewQuote]) -> Result<Vec<i64>, AppError> {
        let mut err = self.insert_error.lock().unwrap();
        if let Some(e) = err.take() {
            return Err(e);
        }
        drop(err);

        let mut ids = Vec::with_capacity(quotes.len());
        let mut rows = self.rows.lock().unwrap();
        for quote in quotes {
            let id = self.assign_id();
            rows.push(quote.clone().into_quote(id));
            ids.push(id);
        }
        Ok(ids)
    }

    async fn get(&self, id: i64) -> Result<Option<Quote>, AppError> {
        Ok(self.rows.lock().unwrap().iter().find(|q| q.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Quote>, AppError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn update(&self, id: i64, quote: &NewQuote) -> Result<u64, AppError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|q| q.id == id) {
            Some(row) => {
                row.text = quote.text.clone();
                row.author = quote.author.clone();
                row.tags = quote.tags.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|q| q.id != id);
        Ok((before - rows.len()) as u64)
    }

    async fn reset(&self) -> Result<(), AppError> {
        // Rows go, the id counter survives: fresh ids each run.
        self.rows.lock().unwrap().clear();
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ScriptedPages
// ---------------------------------------------------------------------------

/// Page source driven by a fixed script of HTML snapshots.
///
/// `advance` steps through the script and reports the next-page control as
/// absent once the script is exhausted. `wait_for` answers by substring
/// search for the selector's bare class token, which is as much DOM as a
/// test double needs.
pub struct ScriptedPages {
    pages: Vec<String>,
    index: Arc<Mutex<usize>>,
    content_error: Arc<Mutex<Option<AppError>>>,
    closed: Arc<AtomicBool>,
}

impl ScriptedPages {
    pub fn new<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pages: pages.into_iter().map(Into::into).collect(),
            index: Arc::new(Mutex::new(0)),
            content_error: Arc::new(Mutex::new(None)),
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Single page whose content read fails with the given error.
    pub fn with_content_error(error: AppError) -> Self {
        let pages = Self::new(["<html><body></body></html>"]);
        *pages.content_error.lock().unwrap() = Some(error);
        pages
    }

    /// Handle for asserting the session was released after the run.
    pub fn closed_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.closed)
    }

    fn current(&self) -> String {
        let index = *self.index.lock().unwrap();
        self.pages.get(index).cloned().unwrap_or_default()
    }
}

impl PageSource for ScriptedPages {
    async fn content(&self) -> Result<String, AppError> {
        let mut err = self.content_error.lock().unwrap();
        if let Some(e) = err.take() {
            return Err(e);
        }
        drop(err);
        Ok(self.current())
    }

    async fn wait_for(&self, selector: &str, _timeout: Duration) -> Result<bool, AppError> {
        let token = selector.trim_start_matches('.');
        Ok(self.current().contains(token))
    }

    async fn advance(&self) -> Result<bool, AppError> {
        let mut index = self.index.lock().unwrap();
        if *index + 1 < self.pages.len() {
            *index += 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn close(self) -> Result<(), AppError> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

/// Create a dummy NewQuote for testing.
pub fn make_quote(text: &str, author: &str, tags: &str) -> NewQuote {
    NewQuote::new(text, author, tags)
}
