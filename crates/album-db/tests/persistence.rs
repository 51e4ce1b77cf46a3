//! On-disk persistence tests for the comment store.

use album_core::{CommentStore, NewComment};
use album_db::{SqliteCommentStore, setup_database};

fn draft(post_id: i64, body: &str) -> NewComment {
    NewComment::new(post_id, "Visitor", "visitor@example.com", body).unwrap()
}

#[tokio::test]
async fn test_setup_creates_missing_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("nested").join("data").join("album.db");

    let pool = setup_database(&db_path).await.unwrap();
    pool.close().await;

    assert!(db_path.exists());
}

#[tokio::test]
async fn test_comments_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("album.db");

    let pool = setup_database(&db_path).await.unwrap();
    let store = SqliteCommentStore::new(pool.clone());
    store.insert(&draft(12, "first")).await.unwrap();
    store.insert(&draft(12, "second")).await.unwrap();
    pool.close().await;

    let reopened = SqliteCommentStore::new(setup_database(&db_path).await.unwrap());
    let rows = reopened.comments_for(12).await.unwrap();

    let bodies: Vec<&str> = rows.iter().map(|c| c.body.as_str()).collect();
    assert_eq!(bodies, vec!["first", "second"]);
}

#[tokio::test]
async fn test_ids_keep_increasing_after_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("album.db");

    let pool = setup_database(&db_path).await.unwrap();
    let first = SqliteCommentStore::new(pool.clone())
        .insert(&draft(1, "a"))
        .await
        .unwrap();
    pool.close().await;

    let second = SqliteCommentStore::new(setup_database(&db_path).await.unwrap())
        .insert(&draft(1, "b"))
        .await
        .unwrap();

    assert!(second > first);
}
