use quotery_core::NewQuote;
use quotery_db::{Database, DatabaseConfig};

#[tokio::test]
async fn connect_creates_missing_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.db");

    let config = DatabaseConfig {
        url: format!("sqlite:{}", path.display()),
        max_connections: 1,
    };

    let db = Database::connect(&config).await.unwrap();
    db.init().await.unwrap();

    let repo = db.quote_repo();
    let id = repo
        .insert(&NewQuote::new("Persisted.", "Author", ""))
        .await
        .unwrap();

    assert!(path.exists());
    assert_eq!(repo.get(id).await.unwrap().unwrap().text, "Persisted.");
}

#[tokio::test]
async fn init_is_idempotent_and_preserves_rows() {
    let dir = tempfile::tempdir().unwrap();
    let config = DatabaseConfig {
        url: format!("sqlite:{}", dir.path().join("quotes.db").display()),
        max_connections: 1,
    };

    let db = Database::connect(&config).await.unwrap();
    db.init().await.unwrap();
    db.quote_repo()
        .insert(&NewQuote::new("Survivor.", "Author", ""))
        .await
        .unwrap();

    // Server startup re-runs schema setup; ingested data must survive it.
    db.init().await.unwrap();
    assert_eq!(db.quote_repo().list().await.unwrap().len(), 1);
}
