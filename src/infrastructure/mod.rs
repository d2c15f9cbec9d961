//! Infrastructure layer for external integrations.
//!
//! Concrete implementations of the domain repository traits.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repositories
//! - [`memory`] - In-process store used when no database is configured

pub mod memory;
pub mod persistence;
