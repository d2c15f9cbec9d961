//! Repository trait definitions for the domain layer.
//!
//! Traits define the data access contract; implementations live in
//! `crate::infrastructure`. Mock implementations are generated via `mockall`
//! for unit tests.
//!
//! # Available Repositories
//!
//! - [`ServiceRepository`] - Service listing, lookup and creation
//! - [`BlogRepository`] - Blog listing, lookup and view counting
//! - [`ContactRepository`] - Contact form submissions
//! - [`UserRepository`] - Registered accounts

pub mod blog_repository;
pub mod contact_repository;
pub mod service_repository;
pub mod user_repository;

pub use blog_repository::BlogRepository;
pub use contact_repository::ContactRepository;
pub use service_repository::ServiceRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use blog_repository::MockBlogRepository;
#[cfg(test)]
pub use contact_repository::MockContactRepository;
#[cfg(test)]
pub use service_repository::MockServiceRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
