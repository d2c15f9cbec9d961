//! Core domain entities representing the content model.
//!
//! Entities are plain data structures. Creation inputs use separate
//! `New*` structs; list filters live next to the entity they filter.
//!
//! - [`Service`] - An offering shown on the services page
//! - [`BlogPost`] - A blog article with author and comments
//! - [`Contact`] - A contact form submission
//! - [`User`] - A registered account

pub mod blog_post;
pub mod contact;
pub mod service;
pub mod user;

pub use blog_post::{Author, BlogPage, BlogPost, BlogQuery, Comment, NewBlogPost};
pub use contact::{Contact, NewContact};
pub use service::{NewService, Service, ServiceFilter};
pub use user::{NewUser, User};
