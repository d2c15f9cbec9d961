//! PostgreSQL repository implementations.
//!
//! Queries use SQLx runtime-checked statements with bound parameters.
//!
//! # Repositories
//!
//! - [`PgServiceRepository`] - Services
//! - [`PgBlogRepository`] - Blog posts, authors and comments
//! - [`PgContactRepository`] - Contact submissions
//! - [`PgUserRepository`] - User accounts

pub mod pg_blog_repository;
pub mod pg_contact_repository;
pub mod pg_service_repository;
pub mod pg_user_repository;

pub use pg_blog_repository::PgBlogRepository;
pub use pg_contact_repository::PgContactRepository;
pub use pg_service_repository::PgServiceRepository;
pub use pg_user_repository::PgUserRepository;
