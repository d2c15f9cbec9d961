//! User registration.

use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::hash_password;

/// Service for creating user accounts.
///
/// Passwords are hashed with Argon2id, keyed by the server-side pepper, before
/// they reach the repository. Hashing runs on the blocking pool.
pub struct AccountService {
    repository: Arc<dyn UserRepository>,
    pepper: String,
}

impl AccountService {
    pub fn new(repository: Arc<dyn UserRepository>, pepper: String) -> Self {
        Self { repository, pepper }
    }

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered,
    /// including when a concurrent registration wins the insert.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn register(
        &self,
        name: String,
        email: String,
        password: &str,
    ) -> Result<User, AppError> {
        if self.repository.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("User already exists"));
        }

        let pepper = self.pepper.clone();
        let password = password.to_owned();
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&pepper, &password))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Password hashing task failed");
                AppError::internal("Server error while hashing password")
            })??;

        let new_user = NewUser {
            name,
            email,
            password_hash,
        };

        let user = self.repository.create(new_user).await.map_err(|e| match e {
            AppError::Conflict { .. } => AppError::conflict("User already exists"),
            other => other,
        })?;

        tracing::info!(id = user.id, email = %user.email, "User registered");
        Ok(user)
    }
}
