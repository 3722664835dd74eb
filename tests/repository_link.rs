mod common;

use sqlx::PgPool;
use std::sync::Arc;
use short_links::domain::entities::NewLink;
use short_links::domain::repositories::LinkRepository;
use short_links::infrastructure::persistence::PgLinkRepository;

#[sqlx::test]
async fn test_insert_link(pool: PgPool) {
    let owner = common::create_test_user(&pool, "alice").await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo
        .insert(NewLink {
            code: "aB3xY9".to_string(),
            destination: "https://example.com".to_string(),
            owner: Some(owner),
        })
        .await
        .unwrap();

    assert_eq!(link.code, "aB3xY9");
    assert_eq!(link.destination, "https://example.com");
    assert_eq!(link.clicks, 0);
    assert_eq!(link.owner, Some(owner));
}

#[sqlx::test]
async fn test_insert_duplicate_code_reports_constraint(pool: PgPool) {
    common::create_test_link(&pool, "taken1", "https://a.example.com", None).await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let err = repo
        .insert(NewLink {
            code: "taken1".to_string(),
            destination: "https://b.example.com".to_string(),
            owner: None,
        })
        .await
        .unwrap_err();

    assert_eq!(err.conflict_constraint(), Some("links_code_key"));
}

#[sqlx::test]
async fn test_find_by_code(pool: PgPool) {
    common::create_test_link(&pool, "abc123", "https://example.com", None).await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo.find_by_code("abc123").await.unwrap();
    assert_eq!(link.unwrap().destination, "https://example.com");

    assert!(repo.find_by_code("nope00").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_codes_are_case_sensitive(pool: PgPool) {
    common::create_test_link(&pool, "AbCdEf", "https://upper.example.com", None).await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    assert!(repo.find_by_code("abcdef").await.unwrap().is_none());
    assert!(repo.find_by_code("AbCdEf").await.unwrap().is_some());
}

#[sqlx::test]
async fn test_find_by_destination_and_owner(pool: PgPool) {
    let alice = common::create_test_user(&pool, "alice").await;
    let bob = common::create_test_user(&pool, "bob").await;
    common::create_test_link(&pool, "alice1", "https://example.com", Some(alice)).await;
    common::create_test_link(&pool, "anon01", "https://example.com", None).await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let found = repo
        .find_by_destination_and_owner("https://example.com", Some(alice))
        .await
        .unwrap();
    assert_eq!(found.unwrap().code, "alice1");

    let anonymous = repo
        .find_by_destination_and_owner("https://example.com", None)
        .await
        .unwrap();
    assert_eq!(anonymous.unwrap().code, "anon01");

    let other = repo
        .find_by_destination_and_owner("https://example.com", Some(bob))
        .await
        .unwrap();
    assert!(other.is_none());
}

#[sqlx::test]
async fn test_increment_clicks(pool: PgPool) {
    common::create_test_link(&pool, "click1", "https://example.com", None).await;
    let repo = PgLinkRepository::new(Arc::new(pool.clone()));

    assert!(repo.increment_clicks("click1").await.unwrap());
    assert!(repo.increment_clicks("click1").await.unwrap());
    assert!(!repo.increment_clicks("ghost0").await.unwrap());

    assert_eq!(common::clicks_of(&pool, "click1").await, 2);
}

#[sqlx::test]
async fn test_concurrent_increments_are_not_lost(pool: PgPool) {
    common::create_test_link(&pool, "race01", "https://example.com", None).await;
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.increment_clicks("race01").await.unwrap() })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap());
    }

    assert_eq!(common::clicks_of(&pool, "race01").await, 20);
}

#[sqlx::test]
async fn test_list_by_owner_newest_first(pool: PgPool) {
    let alice = common::create_test_user(&pool, "alice").await;
    let bob = common::create_test_user(&pool, "bob").await;
    common::create_dated_link(&pool, "old001", "https://a.example.com", alice, 30).await;
    common::create_dated_link(&pool, "new001", "https://b.example.com", alice, 1).await;
    common::create_dated_link(&pool, "bob001", "https://c.example.com", bob, 5).await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let links = repo.list_by_owner(alice).await.unwrap();
    let codes: Vec<&str> = links.iter().map(|l| l.code.as_str()).collect();

    assert_eq!(codes, vec!["new001", "old001"]);
}

#[sqlx::test]
async fn test_delete_only_by_owner(pool: PgPool) {
    let alice = common::create_test_user(&pool, "alice").await;
    let bob = common::create_test_user(&pool, "bob").await;
    common::create_test_link(&pool, "mine01", "https://example.com", Some(alice)).await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    assert!(!repo.delete_by_code_and_owner("mine01", bob).await.unwrap());
    assert!(repo.find_by_code("mine01").await.unwrap().is_some());

    assert!(repo.delete_by_code_and_owner("mine01", alice).await.unwrap());
    assert!(repo.find_by_code("mine01").await.unwrap().is_none());

    assert!(!repo.delete_by_code_and_owner("mine01", alice).await.unwrap());
}

#[sqlx::test]
async fn test_count(pool: PgPool) {
    common::create_test_link(&pool, "cnt001", "https://a.example.com", None).await;
    common::create_test_link(&pool, "cnt002", "https://b.example.com", None).await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    assert_eq!(repo.count().await.unwrap(), 2);
}
