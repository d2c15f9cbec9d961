//! Shared helpers.

pub mod password;
