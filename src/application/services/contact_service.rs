//! Contact form submissions.

use std::sync::Arc;

use crate::domain::entities::{Contact, NewContact};
use crate::domain::repositories::ContactRepository;
use crate::error::AppError;

pub struct ContactService {
    repository: Arc<dyn ContactRepository>,
}

impl ContactService {
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self { repository }
    }

    /// Records a validated contact submission.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the submission cannot be stored.
    pub async fn submit(&self, new_contact: NewContact) -> Result<Contact, AppError> {
        tracing::info!(
            name = %new_contact.name,
            email = %new_contact.email,
            subject = %new_contact.subject,
            "Contact form submission"
        );

        self.repository.create(new_contact).await.map_err(|e| {
            tracing::error!(error = %e, "Contact form error");
            AppError::internal("Server error while submitting contact form")
        })
    }

    /// Lists the most recent submissions, newest first.
    pub async fn recent(&self, limit: i64) -> Result<Vec<Contact>, AppError> {
        self.repository.list_recent(limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockContactRepository;
    use chrono::Utc;

    fn new_contact() -> NewContact {
        NewContact {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: None,
            company: Some("Farms Inc".to_string()),
            subject: "Inquiry about services".to_string(),
            message: "I would like to know more about drone spraying.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_persists_contact() {
        let mut mock = MockContactRepository::new();
        mock.expect_create()
            .withf(|c| c.email == "john@example.com" && c.company.as_deref() == Some("Farms Inc"))
            .times(1)
            .returning(|c| {
                Ok(Contact {
                    id: 1,
                    name: c.name,
                    email: c.email,
                    phone: c.phone,
                    company: c.company,
                    subject: c.subject,
                    message: c.message,
                    created_at: Utc::now(),
                })
            });

        let service = ContactService::new(Arc::new(mock));
        let contact = service.submit(new_contact()).await.unwrap();
        assert_eq!(contact.id, 1);
    }

    #[tokio::test]
    async fn test_submit_store_error_is_internal() {
        let mut mock = MockContactRepository::new();
        mock.expect_create()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error")));

        let service = ContactService::new(Arc::new(mock));
        let err = service.submit(new_contact()).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Internal { ref message } if message == "Server error while submitting contact form"
        ));
    }
}
