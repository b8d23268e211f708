use quotery_core::error::AppError;
use quotery_core::models::{NewQuote, Quote};
use sqlx::SqlitePool;

/// AUTOINCREMENT keeps deleted ids retired for the lifetime of the table,
/// so an id observed by a caller is never silently recycled.
pub(crate) const CREATE_QUOTES_TABLE_IF_MISSING: &str = r#"
    CREATE TABLE IF NOT EXISTS quotes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        text TEXT NOT NULL,
        author TEXT NOT NULL,
        tags TEXT NOT NULL DEFAULT ''
    )
"#;

const DROP_QUOTES_TABLE: &str = "DROP TABLE IF EXISTS quotes";

/// Repository for quote persistence in SQLite.
#[derive(Clone)]
pub struct QuoteRepository {
    pool: SqlitePool,
}

impl QuoteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a single quote. Returns the assigned id.
    pub async fn insert(&self, quote: &NewQuote) -> Result<i64, AppError> {
        let result = sqlx::query("INSERT INTO quotes (text, author, tags) VALUES (?, ?, ?)")
            .bind(&quote.text)
            .bind(&quote.author)
            .bind(&quote.tags)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.last_insert_rowid())
    }

    /// Insert a batch of quotes in one transaction, preserving input order.
    /// Returns the assigned ids in that order.
    pub async fn insert_batch(&self, quotes: &[NewQuote]) -> Result<Vec<i64>, AppError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let mut ids = Vec::with_capacity(quotes.len());
        for quote in quotes {
            let result = sqlx::query("INSERT INTO quotes (text, author, tags) VALUES (?, ?, ?)")
                .bind(&quote.text)
                .bind(&quote.author)
                .bind(&quote.tags)
                .execute(&mut *tx)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;
            ids.push(result.last_insert_rowid());
        }

        tx.commit()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(ids)
    }

    /// Look up one quote by id.
    pub async fn get(&self, id: i64) -> Result<Option<Quote>, AppError> {
        let row = sqlx::query_as::<_, QuoteRow>(
            "SELECT id, text, author, tags FROM quotes WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    /// All quotes in insertion order.
    pub async fn list(&self) -> Result<Vec<Quote>, AppError> {
        let rows =
            sqlx::query_as::<_, QuoteRow>("SELECT id, text, author, tags FROM quotes ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Replace the content fields of the quote with this id.
    /// Returns rows affected (0 when the id is absent).
    pub async fn update(&self, id: i64, quote: &NewQuote) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE quotes SET text = ?, author = ?, tags = ? WHERE id = ?")
            .bind(&quote.text)
            .bind(&quote.author)
            .bind(&quote.tags)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected())
    }

    /// Delete the quote with this id. Returns rows affected (0 or 1).
    pub async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM quotes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected())
    }

    /// Drop and recreate the quotes table.
    ///
    /// The ingestion pipeline calls this once per run; everything the
    /// previous run loaded is gone before the first page commits.
    pub async fn reset(&self) -> Result<(), AppError> {
        sqlx::query(DROP_QUOTES_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        sqlx::query(CREATE_QUOTES_TABLE_IF_MISSING)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    /// Check database connectivity.
    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct QuoteRow {
    id: i64,
    text: String,
    author: String,
    tags: String,
}

impl From<QuoteRow> for Quote {
    fn from(row: QuoteRow) -> Self {
        Quote {
            id: row.id,
            text: row.text,
            author: row.author,
            tags: row.tags,
        }
    }
}

// -- Trait implementation --

impl quotery_core::traits::QuoteStore for QuoteRepository {
    async fn insert(&self, quote: &NewQuote) -> Result<i64, AppError> {
        QuoteRepository::insert(self, quote).await
    }

    async fn insert_batch(&self, quotes: &[NewQuote]) -> Result<Vec<i64>, AppError> {
        QuoteRepository::insert_batch(self, quotes).await
    }

    async fn get(&self, id: i64) -> Result<Option<Quote>, AppError> {
        QuoteRepository::get(self, id).await
    }

    async fn list(&self) -> Result<Vec<Quote>, AppError> {
        QuoteRepository::list(self).await
    }

    async fn update(&self, id: i64, quote: &NewQuote) -> Result<u64, AppError> {
        QuoteRepository::update(self, id, quote).await
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        QuoteRepository::delete(self, id).await
    }

    async fn reset(&self) -> Result<(), AppError> {
        QuoteRepository::reset(self).await
    }
}
