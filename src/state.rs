//! Shared application state and backend wiring.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::{AccountService, BlogService, ContactService, ServiceCatalog};
use crate::domain::catalog::Catalog;
use crate::domain::repositories::{
    BlogRepository, ContactRepository, ServiceRepository, UserRepository,
};
use crate::infrastructure::memory::MemoryStore;
use crate::infrastructure::persistence::{
    PgBlogRepository, PgContactRepository, PgServiceRepository, PgUserRepository,
};

/// Repository set for one storage backend.
#[derive(Clone)]
pub struct Repositories {
    pub services: Arc<dyn ServiceRepository>,
    pub blog: Arc<dyn BlogRepository>,
    pub contacts: Arc<dyn ContactRepository>,
    pub users: Arc<dyn UserRepository>,
    pub backend: &'static str,
}

impl Repositories {
    pub fn postgres(pool: Arc<PgPool>) -> Self {
        Self {
            services: Arc::new(PgServiceRepository::new(pool.clone())),
            blog: Arc::new(PgBlogRepository::new(pool.clone())),
            contacts: Arc::new(PgContactRepository::new(pool.clone())),
            users: Arc::new(PgUserRepository::new(pool)),
            backend: "postgres",
        }
    }

    pub fn memory(store: Arc<MemoryStore>) -> Self {
        Self {
            services: store.clone(),
            blog: store.clone(),
            contacts: store.clone(),
            users: store,
            backend: "memory",
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub service_catalog: Arc<ServiceCatalog>,
    pub blog_service: Arc<BlogService>,
    pub contact_service: Arc<ContactService>,
    pub account_service: Arc<AccountService>,
    pub store_backend: &'static str,
}

impl AppState {
    pub fn new(repositories: Repositories, catalog: Arc<Catalog>, password_pepper: String) -> Self {
        Self {
            service_catalog: Arc::new(ServiceCatalog::new(
                repositories.services,
                catalog.clone(),
            )),
            blog_service: Arc::new(BlogService::new(repositories.blog, catalog)),
            contact_service: Arc::new(ContactService::new(repositories.contacts)),
            account_service: Arc::new(AccountService::new(repositories.users, password_pepper)),
            store_backend: repositories.backend,
        }
    }
}
