//! Repository trait for contact submissions.

use crate::domain::entities::{Contact, NewContact};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for contact form submissions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Stores a submission.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn create(&self, new_contact: NewContact) -> Result<Contact, AppError>;

    /// Lists the most recent submissions, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn list_recent(&self, limit: i64) -> Result<Vec<Contact>, AppError>;
}
