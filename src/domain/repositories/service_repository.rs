//! Repository trait for service data access.

use crate::domain::entities::{NewService, Service, ServiceFilter};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for services.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgServiceRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryStore`] - In-process store used without a database
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Lists active services matching the filter, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find(&self, filter: &ServiceFilter) -> Result<Vec<Service>, AppError>;

    /// Finds a service by id, regardless of its active flag.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Service>, AppError>;

    /// Creates a new service.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn create(&self, new_service: NewService) -> Result<Service, AppError>;

    /// Verifies the backing store answers queries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
