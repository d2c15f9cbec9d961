//! DTOs for the contact form.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, NoneAsEmptyString, serde_as};
use validator::Validate;

use crate::api::validation::{FieldOrder, not_blank};
use crate::domain::entities::{Contact, NewContact};

/// Body of `POST /api/contact`.
///
/// Missing required fields deserialize to empty strings so that every rule
/// is reported, not just the first parse failure.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct ContactRequest {
    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "Name is required"),
        length(min = 2, max = 100, message = "Name must be between 2 and 100 characters")
    )]
    pub name: String,

    #[serde(default)]
    #[validate(email(message = "Please include a valid email"))]
    pub email: String,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub phone: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub company: Option<String>,

    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "Subject is required"),
        length(min = 5, max = 200, message = "Subject must be between 5 and 200 characters")
    )]
    pub subject: String,

    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "Message is required"),
        length(min = 10, max = 2000, message = "Message must be between 10 and 2000 characters")
    )]
    pub message: String,
}

impl FieldOrder for ContactRequest {
    const FIELDS: &'static [&'static str] = &["name", "email", "subject", "message"];
}

impl From<ContactRequest> for NewContact {
    fn from(req: ContactRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            phone: req.phone,
            company: req.company,
            subject: req.subject,
            message: req.message,
        }
    }
}

/// Echo of a stored submission.
#[serde_as]
#[derive(Debug, Serialize)]
pub struct ContactReceipt {
    #[serde_as(as = "DisplayFromStr")]
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<Contact> for ContactReceipt {
    fn from(c: Contact) -> Self {
        Self {
            id: c.id,
            name: c.name,
            email: c.email,
        }
    }
}
