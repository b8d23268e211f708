use sqlx::sqlite::SqlitePoolOptions;

use quotery_db::{Database, QuoteRepository};

/// In-memory SQLite repository with the schema in place.
///
/// A single-connection pool keeps every operation on the same `:memory:`
/// database.
pub async fn setup_repo() -> QuoteRepository {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory SQLite");

    let db = Database::from_pool(pool);
    db.init().await.expect("Failed to set up schema");
    db.quote_repo()
}
