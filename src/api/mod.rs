//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into application service calls and
//! formats responses in the `{ success, ... }` envelopes clients expect.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - CORS, panic recovery and tracing
//! - [`routes`] - Route configuration and composition
//! - [`validation`] - Ordered flattening of validation errors

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod validation;
