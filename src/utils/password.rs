//! Password hashing with Argon2id.
//!
//! Hashes are stored as PHC strings (`$argon2id$v=19$...`), which carry the
//! algorithm parameters and the salt. The server-side pepper is passed to
//! Argon2 as its secret input, so a leaked `users` table cannot be attacked
//! offline without it.

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

use crate::error::AppError;

const SALT_LEN: usize = 16;

fn hasher(pepper: &str) -> Result<Argon2<'_>, AppError> {
    Argon2::new_with_secret(
        pepper.as_bytes(),
        Algorithm::Argon2id,
        Version::V0x13,
        Params::default(),
    )
    .map_err(|e| {
        tracing::error!(error = %e, "Invalid password pepper");
        AppError::internal("Server error while hashing password")
    })
}

/// Hashes a password with a freshly generated salt.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if hashing fails.
pub fn hash_password(pepper: &str, password: &str) -> Result<String, AppError> {
    let salt_bytes: [u8; SALT_LEN] = rand::random();
    let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| {
        tracing::error!(error = %e, "Failed to encode password salt");
        AppError::internal("Server error while hashing password")
    })?;

    let hash = hasher(pepper)?
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to hash password");
            AppError::internal("Server error while hashing password")
        })?;

    Ok(hash.to_string())
}

/// Checks a password against a stored PHC hash.
///
/// A malformed stored hash never matches.
pub fn verify_password(pepper: &str, password: &str, stored: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored) else {
        return false;
    };
    hasher(pepper)
        .map(|argon2| argon2.verify_password(password.as_bytes(), &parsed).is_ok())
        .unwrap_or(false)
}
