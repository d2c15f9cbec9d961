mod common;

use agronova_api::domain::entities::{NewService, ServiceFilter};
use agronova_api::domain::repositories::ServiceRepository;
use agronova_api::infrastructure::persistence::PgServiceRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_service(title: &str, category: &str, is_active: bool) -> NewService {
    NewService {
        title: title.to_string(),
        description: format!("{title} description"),
        icon: "fas fa-seedling".to_string(),
        features: vec!["Sensors".to_string(), "Drones".to_string()],
        category: category.to_string(),
        is_active,
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_service(pool: PgPool) {
    let repo = PgServiceRepository::new(Arc::new(pool));

    let service = repo
        .create(new_service("Soil Mapping", "Monitoring", true))
        .await
        .unwrap();

    assert!(service.id > 0);
    assert_eq!(service.title, "Soil Mapping");
    assert_eq!(service.features, vec!["Sensors", "Drones"]);
    assert!(service.is_active);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_active_newest_first(pool: PgPool) {
    let repo = PgServiceRepository::new(Arc::new(pool));
    repo.create(new_service("First", "Monitoring", true)).await.unwrap();
    repo.create(new_service("Hidden", "Monitoring", false)).await.unwrap();
    repo.create(new_service("Second", "Irrigation", true)).await.unwrap();

    let services = repo.find(&ServiceFilter::default()).await.unwrap();

    let titles: Vec<_> = services.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Second", "First"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_by_category(pool: PgPool) {
    let repo = PgServiceRepository::new(Arc::new(pool));
    repo.create(new_service("Drip Lines", "Irrigation", true)).await.unwrap();
    repo.create(new_service("Yield Maps", "Analytics", true)).await.unwrap();

    let filter = ServiceFilter::default().with_category(Some("Irrigation".to_string()));
    let services = repo.find(&filter).await.unwrap();

    assert_eq!(services.len(), 1);
    assert_eq!(services[0].title, "Drip Lines");

    let filter = ServiceFilter::default().with_category(Some("irrigation".to_string()));
    assert!(repo.find(&filter).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_by_id(pool: PgPool) {
    let repo = PgServiceRepository::new(Arc::new(pool));
    let created = repo.create(new_service("Drones", "Monitoring", false)).await.unwrap();

    let found = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(found.map(|s| s.title), Some("Drones".to_string()));

    assert!(repo.find_by_id(created.id + 1000).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_ping(pool: PgPool) {
    let repo = PgServiceRepository::new(Arc::new(pool));

    assert!(repo.ping().await.is_ok());
}
