//! PostgreSQL implementation of service repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewService, Service, ServiceFilter};
use crate::domain::repositories::ServiceRepository;
use crate::error::AppError;

const SERVICE_COLUMNS: &str =
    "id, title, description, icon, features, category, is_active, created_at";

#[derive(sqlx::FromRow)]
struct ServiceRow {
    id: i64,
    title: String,
    description: String,
    icon: String,
    features: Vec<String>,
    category: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl From<ServiceRow> for Service {
    fn from(r: ServiceRow) -> Self {
        Service {
            id: r.id,
            title: r.title,
            description: r.description,
            icon: r.icon,
            features: r.features,
            category: r.category,
            is_active: r.is_active,
            created_at: r.created_at,
        }
    }
}

/// PostgreSQL repository for services.
pub struct PgServiceRepository {
    pool: Arc<PgPool>,
}

impl PgServiceRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ServiceRepository for PgServiceRepository {
    async fn find(&self, filter: &ServiceFilter) -> Result<Vec<Service>, AppError> {
        let sql = format!(
            r#"
            SELECT {SERVICE_COLUMNS}
            FROM services
            WHERE is_active
              AND ($1::text IS NULL OR category = $1)
            ORDER BY created_at DESC, id DESC
            "#
        );

        let rows = sqlx::query_as::<_, ServiceRow>(&sql)
            .bind(filter.category.as_deref())
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Service::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Service>, AppError> {
        let sql = format!("SELECT {SERVICE_COLUMNS} FROM services WHERE id = $1");

        let row = sqlx::query_as::<_, ServiceRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Service::from))
    }

    async fn create(&self, new_service: NewService) -> Result<Service, AppError> {
        let sql = format!(
            r#"
            INSERT INTO services (title, description, icon, features, category, is_active)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {SERVICE_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, ServiceRow>(&sql)
            .bind(new_service.title)
            .bind(new_service.description)
            .bind(new_service.icon)
            .bind(new_service.features)
            .bind(new_service.category)
            .bind(new_service.is_active)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }
}
