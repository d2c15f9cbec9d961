//! PostgreSQL implementation of contact repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Contact, NewContact};
use crate::domain::repositories::ContactRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct ContactRow {
    id: i64,
    name: String,
    email: String,
    phone: Option<String>,
    company: Option<String>,
    subject: String,
    message: String,
    created_at: DateTime<Utc>,
}

impl From<ContactRow> for Contact {
    fn from(r: ContactRow) -> Self {
        Contact {
            id: r.id,
            name: r.name,
            email: r.email,
            phone: r.phone,
            company: r.company,
            subject: r.subject,
            message: r.message,
            created_at: r.created_at,
        }
    }
}

/// PostgreSQL repository for contact submissions.
pub struct PgContactRepository {
    pool: Arc<PgPool>,
}

impl PgContactRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    async fn create(&self, new_contact: NewContact) -> Result<Contact, AppError> {
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            INSERT INTO contacts (name, email, phone, company, subject, message)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, email, phone, company, subject, message, created_at
            "#,
        )
        .bind(new_contact.name)
        .bind(new_contact.email)
        .bind(new_contact.phone)
        .bind(new_contact.company)
        .bind(new_contact.subject)
        .bind(new_contact.message)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Contact>, AppError> {
        let rows = sqlx::query_as::<_, ContactRow>(
            r#"
            SELECT id, name, email, phone, company, subject, message, created_at
            FROM contacts
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Contact::from).collect())
    }
}
