//! Ingestion side of quotery: headless-browser page session, pure HTML
//! extractor, and the pipeline that rebuilds the quote store from the
//! paginated listing.

pub mod browser;
pub mod extract;
pub mod ingest;

pub use browser::BrowserPage;
pub use extract::extract_quotes;
pub use ingest::{IngestConfig, IngestReport, IngestService};
