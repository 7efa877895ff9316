use remark_core::models::NewComment;
use remark_db::CommentRepository;
use uuid::Uuid;

use crate::common::setup_test_db;

#[tokio::test]
async fn insert_and_list_comments() {
    let (pool, _container) = setup_test_db().await;
    let repo = CommentRepository::new(pool);

    let first = NewComment {
        document: serde_json::json!({"author": "ada", "text": "first!"}),
    };
    let second = NewComment {
        document: serde_json::json!({"author": "grace", "text": "nice post"}),
    };

    let first_id = repo.insert(&first).await.unwrap();
    let second_id = repo.insert(&second).await.unwrap();
    assert!(!first_id.is_nil());
    assert_ne!(first_id, second_id);

    let comments = repo.list().await.unwrap();
    assert_eq!(comments.len(), 2);

    let stored = comments
        .iter()
        .find(|c| c.id == first_id)
        .expect("Should find the first comment");
    assert_eq!(
        stored.document,
        serde_json::json!({"author": "ada", "text": "first!"})
    );
}

#[tokio::test]
async fn list_empty_collection() {
    let (pool, _container) = setup_test_db().await;
    let repo = CommentRepository::new(pool);

    let comments = repo.list().await.unwrap();
    assert!(comments.is_empty());
}

#[tokio::test]
async fn delete_removes_comment() {
    let (pool, _container) = setup_test_db().await;
    let repo = CommentRepository::new(pool);

    let id = repo
        .insert(&NewComment {
            document: serde_json::json!({"text": "ephemeral"}),
        })
        .await
        .unwrap();

    repo.delete(id).await.unwrap();

    let comments = repo.list().await.unwrap();
    assert!(comments.iter().all(|c| c.id != id));
}

#[tokio::test]
async fn delete_unknown_id_succeeds() {
    let (pool, _container) = setup_test_db().await;
    let repo = CommentRepository::new(pool);

    // No existence check — deleting an id that was never inserted is fine.
    repo.delete(Uuid::new_v4()).await.unwrap();
}

#[tokio::test]
async fn health_check_succeeds() {
    let (pool, _container) = setup_test_db().await;
    let repo = CommentRepository::new(pool);

    repo.health_check().await.unwrap();
}
