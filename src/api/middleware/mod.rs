//! HTTP middleware: CORS, panic recovery and request tracing.

pub mod cors;
pub mod panic;
pub mod tracing;
