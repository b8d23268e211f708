use quotery_core::NewQuote;

use crate::common::setup_repo;

fn quote(text: &str, author: &str, tags: &str) -> NewQuote {
    NewQuote::new(text, author, tags)
}

#[tokio::test]
async fn insert_assigns_increasing_ids() {
    let repo = setup_repo().await;

    let a = repo.insert(&quote("First", "A", "")).await.unwrap();
    let b = repo.insert(&quote("Second", "B", "x")).await.unwrap();

    assert!(b > a);
}

#[tokio::test]
async fn insert_then_get_round_trips() {
    let repo = setup_repo().await;

    let id = repo
        .insert(&quote("Life is what happens.", "J. Lennon", "life, happiness"))
        .await
        .unwrap();

    let found = repo.get(id).await.unwrap().expect("row should exist");
    assert_eq!(found.id, id);
    assert_eq!(found.text, "Life is what happens.");
    assert_eq!(found.author, "J. Lennon");
    assert_eq!(found.tags, "life, happiness");
}

#[tokio::test]
async fn get_missing_id_returns_none() {
    let repo = setup_repo().await;
    assert!(repo.get(999).await.unwrap().is_none());
}

#[tokio::test]
async fn list_preserves_insertion_order() {
    let repo = setup_repo().await;

    for i in 1..=3 {
        repo.insert(&quote(&format!("Q{i}"), "A", "")).await.unwrap();
    }

    let all = repo.list().await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(
        all.iter().map(|q| q.text.as_str()).collect::<Vec<_>>(),
        vec!["Q1", "Q2", "Q3"]
    );
}

#[tokio::test]
async fn insert_batch_is_ordered_and_complete() {
    let repo = setup_repo().await;

    let batch = vec![
        quote("One", "A", "t1"),
        quote("Two", "B", ""),
        quote("Three", "C", "t2, t3"),
    ];
    let ids = repo.insert_batch(&batch).await.unwrap();

    assert_eq!(ids.len(), 3);
    assert!(ids[0] < ids[1] && ids[1] < ids[2]);

    let all = repo.list().await.unwrap();
    assert_eq!(all[0].text, "One");
    assert_eq!(all[2].tags, "t2, t3");
}

#[tokio::test]
async fn update_replaces_all_content_fields() {
    let repo = setup_repo().await;

    let id = repo.insert(&quote("Old", "Old Author", "old")).await.unwrap();
    let affected = repo
        .update(id, &quote("New", "New Author", "new, tags"))
        .await
        .unwrap();
    assert_eq!(affected, 1);

    let found = repo.get(id).await.unwrap().unwrap();
    assert_eq!(found.id, id);
    assert_eq!(found.text, "New");
    assert_eq!(found.author, "New Author");
    assert_eq!(found.tags, "new, tags");
}

#[tokio::test]
async fn update_missing_id_affects_no_rows() {
    let repo = setup_repo().await;

    let affected = repo.update(42, &quote("X", "Y", "")).await.unwrap();
    assert_eq!(affected, 0);
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_removes_exactly_one_row() {
    let repo = setup_repo().await;

    let keep = repo.insert(&quote("Keep", "A", "")).await.unwrap();
    let gone = repo.insert(&quote("Gone", "B", "")).await.unwrap();

    assert_eq!(repo.delete(gone).await.unwrap(), 1);
    assert_eq!(repo.delete(gone).await.unwrap(), 0);

    let all = repo.list().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, keep);
}

#[tokio::test]
async fn deleted_ids_are_not_reused() {
    let repo = setup_repo().await;

    let first = repo.insert(&quote("First", "A", "")).await.unwrap();
    repo.delete(first).await.unwrap();
    let second = repo.insert(&quote("Second", "B", "")).await.unwrap();

    assert!(second > first);
}

#[tokio::test]
async fn reset_clears_table_and_keeps_accepting_inserts() {
    let repo = setup_repo().await;

    repo.insert(&quote("Before", "A", "")).await.unwrap();
    repo.reset().await.unwrap();
    assert!(repo.list().await.unwrap().is_empty());

    let id = repo.insert(&quote("After", "B", "")).await.unwrap();
    assert_eq!(repo.list().await.unwrap().len(), 1);
    assert!(id >= 1);
}

#[tokio::test]
async fn health_check_passes_on_live_pool() {
    let repo = setup_repo().await;
    repo.health_check().await.unwrap();
}
