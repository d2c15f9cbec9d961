//! DTOs for account registration.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::api::validation::{FieldOrder, not_blank};
use crate::domain::entities::User;

/// Body of `POST /api/auth/register`.
#[derive(Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(email(message = "Please include a valid email"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

impl FieldOrder for RegisterRequest {
    const FIELDS: &'static [&'static str] = &["name", "email", "password"];
}

// Keeps the password out of logs.
impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[serde_as]
#[derive(Debug, Serialize)]
pub struct RegisteredUser {
    #[serde_as(as = "DisplayFromStr")]
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<User> for RegisteredUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
        }
    }
}
