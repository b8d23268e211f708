//! SQLite persistence for the quote catalog: pool ownership, schema setup,
//! and the repository implementing the store contract.

pub mod config;
pub mod database;
pub mod repository;

pub use config::DatabaseConfig;
pub use database::Database;
pub use repository::QuoteRepository;
