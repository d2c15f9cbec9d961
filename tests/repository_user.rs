mod common;

use agronova_api::domain::entities::NewUser;
use agronova_api::domain::repositories::UserRepository;
use agronova_api::error::AppError;
use agronova_api::infrastructure::persistence::PgUserRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_user(name: &str, email: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_find_by_email(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let created = repo.create(new_user("Jane", "jane@example.com")).await.unwrap();
    let found = repo.find_by_email("jane@example.com").await.unwrap().unwrap();

    assert_eq!(found.id, created.id);
    assert_eq!(found.name, "Jane");
    assert!(found.avatar.is_none());
    assert!(repo.find_by_email("nobody@example.com").await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_email_is_conflict(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));
    repo.create(new_user("Jane", "jane@example.com")).await.unwrap();

    let result = repo.create(new_user("Jane Again", "jane@example.com")).await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}
