//! Domain layer containing the content model.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//! - [`catalog`] - Built-in fallback catalog
//! - [`served`] - Store-or-fallback read outcome
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Business logic lives in [`crate::application::services`].

pub mod catalog;
pub mod entities;
pub mod repositories;
pub mod served;
