//! Registered user entity.

use chrono::{DateTime, Utc};

use super::blog_post::Author;

/// A registered user.
///
/// `password_hash` is the Argon2id PHC string produced by
/// [`crate::utils::password::hash_password`]; the plain password is never stored.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Public profile used when the user is referenced by a post or comment.
    pub fn as_author(&self) -> Author {
        Author {
            id: self.id,
            name: self.name.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

/// Input data for registering a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
