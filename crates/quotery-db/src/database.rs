use std::str::FromStr;

use quotery_core::AppError;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::config::DatabaseConfig;
use crate::repository::QuoteRepository;

/// Central database facade: owns the connection pool, sets up the schema,
/// and vends repository instances.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to SQLite with the given configuration, creating the
    /// database file if it does not exist yet.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| AppError::ConfigError(format!("Invalid database URL: {e}")))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to connect: {e}")))?;

        Ok(Self { pool })
    }

    /// Create a `Database` from an existing pool (useful for testing).
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the quotes table if it is not there yet.
    ///
    /// The server path goes through here so that starting the API never
    /// clobbers previously ingested data; only the ingestion pipeline
    /// rebuilds the table from scratch (see [`QuoteRepository::reset`]).
    pub async fn init(&self) -> Result<(), AppError> {
        sqlx::query(crate::repository::CREATE_QUOTES_TABLE_IF_MISSING)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Schema setup failed: {e}")))?;
        Ok(())
    }

    /// Get a [`QuoteRepository`] backed by this pool.
    pub fn quote_repo(&self) -> QuoteRepository {
        QuoteRepository::new(self.pool.clone())
    }

    /// Get a reference to the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
