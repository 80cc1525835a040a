//! Integration tests for the Users domain
//!
//! These run `PgUserRepository` against a real PostgreSQL via testcontainers:
//! - The unique index on `username`
//! - Partial updates through the raw `UPDATE ... RETURNING`
//! - The development seed users

use domain_users::*;
use migration::SEED_PASSWORD;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

fn new_user(username: String) -> NewUser {
    NewUser {
        username,
        password_hash: "not-a-real-hash".to_string(),
        name: Some("Integration".to_string()),
        email: Some("integration@example.com".to_string()),
        home_address: None,
    }
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_create_and_get_user() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("create_and_get_user");

    let username = builder.username("main");
    let created = repo.create(new_user(username.clone())).await.unwrap();
    assert!(repo.username_exists(&username).await.unwrap());

    let fetched = repo.get_by_username(&username).await.unwrap();
    let fetched = assert_some(fetched, "user should exist");
    assert_uuid_eq(fetched.id, created.id, "fetched user id");
    assert_eq!(fetched.email.as_deref(), Some("integration@example.com"));
    assert!(fetched.home_address.is_none());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_duplicate_username_hits_unique_index() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("duplicate_username");

    let username = builder.username("dup");
    repo.create(new_user(username.clone())).await.unwrap();

    let result = repo.create(new_user(username)).await;
    assert!(
        matches!(result, Err(UserError::UsernameTaken(_))),
        "expected UsernameTaken, got {:?}",
        result
    );
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_update_by_username_keeps_other_columns() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("update_by_username");

    let username = builder.username("main");
    let created = repo.create(new_user(username.clone())).await.unwrap();

    let updated = repo
        .update_by_username(
            &username,
            UserChanges {
                home_address: Some(Some("9 Harbor Way".to_string())),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let updated = assert_some(updated, "user should be updated");

    assert_eq!(updated.home_address.as_deref(), Some("9 Harbor Way"));
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.password_hash, created.password_hash);
    assert!(updated.updated_at > created.updated_at);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_update_with_null_clears_column() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("update_null_clears");

    let username = builder.username("main");
    let created = repo.create(new_user(username.clone())).await.unwrap();
    assert!(created.name.is_some());

    let updated = repo
        .update_by_username(
            &username,
            UserChanges {
                name: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let updated = assert_some(updated, "user should be updated");

    assert!(updated.name.is_none());
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.password_hash, created.password_hash);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_update_missing_user() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());

    let result = repo
        .update_by_username(
            "no-such-user",
            UserChanges {
                name: Some(Some("Ghost".to_string())),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_service_password_update_round_trip() {
    let db = TestDatabase::new().await;
    let service = UserService::new(PgUserRepository::new(db.connection()), HashConfig::fast());
    let builder = TestDataBuilder::from_test_name("service_password_update");

    let username = builder.username("main");
    service
        .create(CreateUser {
            username: username.clone(),
            password: "first-password".to_string(),
            name: None,
            email: None,
            home_address: None,
        })
        .await
        .unwrap();

    service
        .update(
            &username,
            UpdateUser {
                password: Some("second-password".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let stored = assert_some(
        service.get_by_username(&username).await.unwrap(),
        "user should exist",
    );
    assert!(verify_password("second-password", &stored.password_hash).await.unwrap());
    assert!(!verify_password("first-password", &stored.password_hash).await.unwrap());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_seed_users_accept_seed_password() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());

    let seeded = repo.get_by_username("jsmith").await.unwrap();
    let seeded = assert_some(seeded, "seed user jsmith should exist");

    assert_eq!(seeded.name.as_deref(), Some("John Smith"));
    assert!(verify_password(SEED_PASSWORD, &seeded.password_hash).await.unwrap());
}
