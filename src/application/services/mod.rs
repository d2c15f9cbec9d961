//! Business logic services for the application layer.

pub mod account_service;
pub mod blog_service;
pub mod contact_service;
pub mod service_catalog;

pub use account_service::AccountService;
pub use blog_service::{BlogService, PageRequest};
pub use contact_service::ContactService;
pub use service_catalog::ServiceCatalog;
