//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls and decide when a response is served
//! from the store or from the built-in catalog. They consume repository
//! traits as `Arc<dyn ...>` so the backend is chosen at startup.
//!
//! # Available Services
//!
//! - [`services::ServiceCatalog`] - Service listing, lookup and creation
//! - [`services::BlogService`] - Paginated blog listing and post detail
//! - [`services::ContactService`] - Contact form submissions
//! - [`services::AccountService`] - User registration

pub mod services;
