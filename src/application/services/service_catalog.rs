//! Service listing, lookup and creation.

use std::sync::Arc;

use crate::domain::catalog::Catalog;
use crate::domain::entities::{NewService, Service, ServiceFilter};
use crate::domain::repositories::ServiceRepository;
use crate::domain::served::{FallbackReason, Served};
use crate::error::AppError;

/// Service for the services page.
///
/// Lists fall back to the built-in catalog when the store has no matching
/// record or fails; detail lookups and writes never fall back.
pub struct ServiceCatalog {
    repository: Arc<dyn ServiceRepository>,
    catalog: Arc<Catalog>,
}

impl ServiceCatalog {
    /// Creates a new service catalog.
    pub fn new(repository: Arc<dyn ServiceRepository>, catalog: Arc<Catalog>) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    /// Lists active services matching the filter, newest first.
    ///
    /// Returns the full fallback catalog (unfiltered) if the store yields no
    /// rows or the query fails.
    pub async fn list(&self, filter: ServiceFilter) -> Served<Vec<Service>> {
        match self.repository.find(&filter).await {
            Ok(services) if !services.is_empty() => Served::Store(services),
            Ok(_) => {
                tracing::debug!(?filter, "No services in store, serving fallback catalog");
                Served::fallback(self.catalog.services.clone(), FallbackReason::Empty)
            }
            Err(e) => {
                tracing::warn!(error = %e, ?filter, "Service query failed, serving fallback catalog");
                Served::fallback(self.catalog.services.clone(), FallbackReason::Unavailable)
            }
        }
    }

    /// Retrieves a service by id.
    ///
    /// Negative ids name fallback catalog records and are answered from the
    /// catalog without touching the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no service has this id.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn get(&self, id: i64) -> Result<Service, AppError> {
        if Catalog::owns_id(id) {
            return self
                .catalog
                .find_service(id)
                .cloned()
                .ok_or_else(|| AppError::not_found("Service not found"));
        }

        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, id, "Get service error");
                AppError::internal("Server error while fetching service")
            })?
            .ok_or_else(|| AppError::not_found("Service not found"))
    }

    /// Creates a service.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn create(&self, new_service: NewService) -> Result<Service, AppError> {
        let service = self.repository.create(new_service).await.map_err(|e| {
            tracing::error!(error = %e, "Create service error");
            AppError::internal("Server error while creating service")
        })?;

        tracing::info!(id = service.id, title = %service.title, "Service created");
        Ok(service)
    }

    /// Checks that the store answers queries.
    pub async fn store_healthy(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockServiceRepository;
    use crate::domain::served::DataSource;
    use chrono::Utc;

    fn stored_service(id: i64, category: &str) -> Service {
        Service {
            id,
            title: "Greenhouse Automation".to_string(),
            description: "Climate control".to_string(),
            icon: "fas fa-warehouse".to_string(),
            features: vec!["Sensors".to_string()],
            category: category.to_string(),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn catalog_service(mock: MockServiceRepository) -> ServiceCatalog {
        ServiceCatalog::new(Arc::new(mock), Arc::new(Catalog::sample()))
    }

    #[tokio::test]
    async fn test_list_from_store() {
        let mut mock = MockServiceRepository::new();
        mock.expect_find()
            .withf(|f| f.category.as_deref() == Some("Greenhouse"))
            .times(1)
            .returning(|_| Ok(vec![stored_service(10, "Greenhouse")]));

        let served = catalog_service(mock)
            .list(ServiceFilter::default().with_category(Some("Greenhouse".to_string())))
            .await;

        assert_eq!(served.source(), DataSource::Store);
        assert_eq!(served.data().len(), 1);
        assert!(served.data().iter().all(|s| s.category == "Greenhouse"));
    }

    #[tokio::test]
    async fn test_list_empty_store_serves_fallback() {
        let mut mock = MockServiceRepository::new();
        mock.expect_find().times(1).returning(|_| Ok(vec![]));

        let served = catalog_service(mock).list(ServiceFilter::default()).await;

        assert_eq!(served.fallback_reason(), Some(FallbackReason::Empty));
        assert_eq!(served.data().len(), 6);
    }

    #[tokio::test]
    async fn test_list_store_error_serves_fallback() {
        let mut mock = MockServiceRepository::new();
        mock.expect_find()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error")));

        let served = catalog_service(mock).list(ServiceFilter::default()).await;

        assert_eq!(served.fallback_reason(), Some(FallbackReason::Unavailable));
        assert_eq!(served.into_inner(), Catalog::sample().services);
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let mut mock = MockServiceRepository::new();
        mock.expect_find_by_id().times(1).returning(|_| Ok(None));

        let err = catalog_service(mock).get(99).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { ref message } if message == "Service not found"));
    }

    #[tokio::test]
    async fn test_get_catalog_id_skips_store() {
        let mut mock = MockServiceRepository::new();
        mock.expect_find_by_id().times(0);

        let catalog = catalog_service(mock);
        let service = catalog.get(-1).await.unwrap();
        assert_eq!(service.title, "Smart Crop Monitoring");

        let err = catalog.get(-42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { ref message } if message == "Service not found"));
    }

    #[tokio::test]
    async fn test_get_store_error_is_internal() {
        let mut mock = MockServiceRepository::new();
        mock.expect_find_by_id()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error")));

        let err = catalog_service(mock).get(1).await.unwrap_err();
        assert!(
            matches!(err, AppError::Internal { ref message } if message == "Server error while fetching service")
        );
    }

    #[tokio::test]
    async fn test_create_store_error_is_internal() {
        let mut mock = MockServiceRepository::new();
        mock.expect_create()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error")));

        let err = catalog_service(mock)
            .create(NewService {
                title: "T".to_string(),
                description: "D".to_string(),
                icon: "I".to_string(),
                features: vec![],
                category: "C".to_string(),
                is_active: true,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
