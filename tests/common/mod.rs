#![allow(dead_code)]

use agronova_api::domain::catalog::Catalog;
use agronova_api::domain::entities::{
    BlogPost, BlogQuery, Contact, NewBlogPost, NewContact, NewService, NewUser, Service,
    ServiceFilter, User,
};
use agronova_api::domain::repositories::{
    BlogRepository, ContactRepository, ServiceRepository, UserRepository,
};
use agronova_api::error::AppError;
use agronova_api::infrastructure::memory::MemoryStore;
use agronova_api::routes::{HttpSettings, app_router};
use axum::ServiceExt;
use axum::extract::Request;
use agronova_api::state::{AppState, Repositories};
use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{DateTime, TimeZone, Utc};
use sqlx::PgPool;
use std::sync::Arc;

pub const TEST_PEPPER: &str = "test-pepper";

pub fn create_test_state(repositories: Repositories) -> AppState {
    AppState::new(
        repositories,
        Arc::new(Catalog::sample()),
        TEST_PEPPER.to_string(),
    )
}

pub fn create_test_server(repositories: Repositories) -> TestServer {
    create_test_server_with(repositories, &HttpSettings::default())
}

pub fn create_test_server_with(repositories: Repositories, settings: &HttpSettings) -> TestServer {
    let app = app_router(create_test_state(repositories), settings);
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

/// Server over a fresh in-memory store, plus the store for seeding.
pub fn memory_server() -> (TestServer, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let server = create_test_server(Repositories::memory(store.clone()));
    (server, store)
}

/// Server whose store fails every call.
pub fn unavailable_server() -> TestServer {
    let store = Arc::new(UnavailableStore);
    create_test_server(Repositories {
        services: store.clone(),
        blog: store.clone(),
        contacts: store.clone(),
        users: store,
        backend: "unavailable",
    })
}

pub fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

pub async fn create_test_service(store: &MemoryStore, title: &str, category: &str) -> Service {
    ServiceRepository::create(
        store,
        NewService {
            title: title.to_string(),
            description: format!("{title} description"),
            icon: "fas fa-seedling".to_string(),
            features: vec!["Feature A".to_string(), "Feature B".to_string()],
            category: category.to_string(),
            is_active: true,
        },
    )
    .await
    .unwrap()
}

pub async fn create_inactive_service(store: &MemoryStore, title: &str, category: &str) -> Service {
    ServiceRepository::create(
        store,
        NewService {
            title: title.to_string(),
            description: "Hidden".to_string(),
            icon: "fas fa-eye-slash".to_string(),
            features: vec![],
            category: category.to_string(),
            is_active: false,
        },
    )
    .await
    .unwrap()
}

pub fn new_post(title: &str, category: &str, published_at: DateTime<Utc>) -> NewBlogPost {
    NewBlogPost {
        title: title.to_string(),
        excerpt: format!("{title} excerpt"),
        content: format!("{title} content"),
        featured_image: String::new(),
        category: category.to_string(),
        read_time: 5,
        is_published: true,
        published_at,
        views: 0,
        tags: vec![],
        author_id: None,
    }
}

pub async fn create_test_post(store: &MemoryStore, new_post: NewBlogPost) -> BlogPost {
    BlogRepository::create(store, new_post).await.unwrap()
}

pub async fn create_test_user(store: &MemoryStore, name: &str, email: &str) -> User {
    UserRepository::create(
        store,
        NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: "00$00".to_string(),
        },
    )
    .await
    .unwrap()
}

pub async fn insert_comment(pool: &PgPool, post_id: i64, user_id: Option<i64>, text: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO blog_comments (post_id, user_id, text) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(post_id)
    .bind(user_id)
    .bind(text)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Store that fails every operation, as a database that went away would.
pub struct UnavailableStore;

fn unavailable() -> AppError {
    AppError::internal("Database error")
}

#[async_trait]
impl ServiceRepository for UnavailableStore {
    async fn find(&self, _filter: &ServiceFilter) -> Result<Vec<Service>, AppError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Service>, AppError> {
        Err(unavailable())
    }

    async fn create(&self, _new_service: NewService) -> Result<Service, AppError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(unavailable())
    }
}

#[async_trait]
impl BlogRepository for UnavailableStore {
    async fn find(
        &self,
        _query: &BlogQuery,
        _offset: i64,
        _limit: i64,
    ) -> Result<Vec<BlogPost>, AppError> {
        Err(unavailable())
    }

    async fn count(&self, _query: &BlogQuery) -> Result<i64, AppError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<BlogPost>, AppError> {
        Err(unavailable())
    }

    async fn increment_views(&self, _id: i64) -> Result<Option<i64>, AppError> {
        Err(unavailable())
    }

    async fn create(&self, _new_post: NewBlogPost) -> Result<BlogPost, AppError> {
        Err(unavailable())
    }
}

#[async_trait]
impl ContactRepository for UnavailableStore {
    async fn create(&self, _new_contact: NewContact) -> Result<Contact, AppError> {
        Err(unavailable())
    }

    async fn list_recent(&self, _limit: i64) -> Result<Vec<Contact>, AppError> {
        Err(unavailable())
    }
}

#[async_trait]
impl UserRepository for UnavailableStore {
    async fn create(&self, _new_user: NewUser) -> Result<User, AppError> {
        Err(unavailable())
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, AppError> {
        Err(unavailable())
    }
}
