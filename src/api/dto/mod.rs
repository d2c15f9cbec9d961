//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Entity ids are exposed as strings under `_id`.

pub mod auth;
pub mod blog;
pub mod contact;
pub mod envelope;
pub mod health;
pub mod index;
pub mod service;
