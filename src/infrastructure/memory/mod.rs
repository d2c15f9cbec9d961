//! In-process store used when no database is configured.
//!
//! [`MemoryStore`] implements every repository trait over plain vectors
//! guarded by a single [`tokio::sync::RwLock`]. Data lives for the lifetime of
//! the process. It backs the service in local development without PostgreSQL
//! and drives the HTTP integration tests.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{
    Author, BlogPost, BlogQuery, Contact, NewBlogPost, NewContact, NewService, NewUser, Service,
    ServiceFilter, User,
};
use crate::domain::repositories::{
    BlogRepository, ContactRepository, ServiceRepository, UserRepository,
};
use crate::error::AppError;

#[derive(Default)]
struct Tables {
    services: Vec<Service>,
    posts: Vec<StoredPost>,
    contacts: Vec<Contact>,
    users: Vec<User>,
    next_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn author(&self, user_id: Option<i64>) -> Option<Author> {
        let id = user_id?;
        self.users.iter().find(|u| u.id == id).map(User::as_author)
    }

    fn materialize(&self, stored: &StoredPost, with_comments: bool) -> BlogPost {
        let mut post = stored.post.clone();
        post.author = self.author(stored.author_id);
        post.comments = with_comments.then(Vec::new);
        post
    }

    /// Published posts matching the query, newest first.
    fn matching_posts(&self, query: &BlogQuery) -> Vec<&StoredPost> {
        let mut posts: Vec<&StoredPost> = self
            .posts
            .iter()
            .filter(|p| query.matches(&p.post))
            .collect();
        posts.sort_by(|a, b| {
            b.post
                .published_at
                .cmp(&a.post.published_at)
                .then(b.post.id.cmp(&a.post.id))
        });
        posts
    }
}

struct StoredPost {
    post: BlogPost,
    author_id: Option<i64>,
}

/// Repository implementation backed by process memory.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory store (no database configured)");
        Self::default()
    }
}

#[async_trait]
impl ServiceRepository for MemoryStore {
    async fn find(&self, filter: &ServiceFilter) -> Result<Vec<Service>, AppError> {
        let tables = self.tables.read().await;
        let mut services: Vec<Service> = tables
            .services
            .iter()
            .filter(|s| filter.matches(s))
            .cloned()
            .collect();
        services.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(services)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Service>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.services.iter().find(|s| s.id == id).cloned())
    }

    async fn create(&self, new_service: NewService) -> Result<Service, AppError> {
        let mut tables = self.tables.write().await;
        let service = Service {
            id: tables.next_id(),
            title: new_service.title,
            description: new_service.description,
            icon: new_service.icon,
            features: new_service.features,
            category: new_service.category,
            is_active: new_service.is_active,
            created_at: Utc::now(),
        };
        tables.services.push(service.clone());
        Ok(service)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[async_trait]
impl BlogRepository for MemoryStore {
    async fn find(
        &self,
        query: &BlogQuery,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<BlogPost>, AppError> {
        let tables = self.tables.read().await;
        let offset = usize::try_from(offset).unwrap_or(0);
        let limit = usize::try_from(limit).unwrap_or(0);

        Ok(tables
            .matching_posts(query)
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|p| tables.materialize(p, false))
            .collect())
    }

    async fn count(&self, query: &BlogQuery) -> Result<i64, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.matching_posts(query).len() as i64)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<BlogPost>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables
            .posts
            .iter()
            .find(|p| p.post.id == id)
            .map(|p| tables.materialize(p, true)))
    }

    async fn increment_views(&self, id: i64) -> Result<Option<i64>, AppError> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .posts
            .iter_mut()
            .find(|p| p.post.id == id)
            .map(|p| {
                p.post.views += 1;
                p.post.views
            }))
    }

    async fn create(&self, new_post: NewBlogPost) -> Result<BlogPost, AppError> {
        let mut tables = self.tables.write().await;
        let stored = StoredPost {
            post: BlogPost {
                id: tables.next_id(),
                title: new_post.title,
                excerpt: new_post.excerpt,
                content: new_post.content,
                featured_image: new_post.featured_image,
                category: new_post.category,
                read_time: new_post.read_time,
                is_published: new_post.is_published,
                published_at: new_post.published_at,
                views: new_post.views,
                tags: new_post.tags,
                author: None,
                comments: None,
            },
            author_id: new_post.author_id,
        };
        let post = tables.materialize(&stored, true);
        tables.posts.push(stored);
        Ok(post)
    }
}

#[async_trait]
impl ContactRepository for MemoryStore {
    async fn create(&self, new_contact: NewContact) -> Result<Contact, AppError> {
        let mut tables = self.tables.write().await;
        let contact = Contact {
            id: tables.next_id(),
            name: new_contact.name,
            email: new_contact.email,
            phone: new_contact.phone,
            company: new_contact.company,
            subject: new_contact.subject,
            message: new_contact.message,
            created_at: Utc::now(),
        };
        tables.contacts.push(contact.clone());
        Ok(contact)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Contact>, AppError> {
        let tables = self.tables.read().await;
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(tables.contacts.iter().rev().take(limit).cloned().collect())
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.email == new_user.email) {
            return Err(AppError::conflict(
                "Unique constraint violation: users_email_key",
            ));
        }

        let user = User {
            id: tables.next_id(),
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            avatar: None,
            created_at: Utc::now(),
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }
}
