//! DTOs for the services endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, NoneAsEmptyString, serde_as};
use validator::Validate;

use crate::api::validation::{FieldOrder, not_blank};
use crate::domain::entities::{NewService, Service};

/// Query string of `GET /api/services`.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct ServiceListParams {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub category: Option<String>,
}

/// A service as returned to clients.
#[serde_as]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse {
    #[serde(rename = "_id")]
    #[serde_as(as = "DisplayFromStr")]
    pub id: i64,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub features: Vec<String>,
    pub category: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Service> for ServiceResponse {
    fn from(s: Service) -> Self {
        Self {
            id: s.id,
            title: s.title,
            description: s.description,
            icon: s.icon,
            features: s.features,
            category: s.category,
            is_active: s.is_active,
            created_at: s.created_at,
        }
    }
}

/// Body of `POST /api/services`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequest {
    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "Title is required"),
        length(max = 100, message = "Title cannot exceed 100 characters")
    )]
    pub title: String,

    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "Description is required"),
        length(max = 1000, message = "Description cannot exceed 1000 characters")
    )]
    pub description: String,

    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "Icon is required"),
        length(max = 50, message = "Icon cannot exceed 50 characters")
    )]
    pub icon: String,

    #[serde(default)]
    pub features: Vec<String>,

    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "Category is required"),
        length(max = 50, message = "Category cannot exceed 50 characters")
    )]
    pub category: String,

    pub is_active: Option<bool>,
}

impl FieldOrder for CreateServiceRequest {
    const FIELDS: &'static [&'static str] = &["title", "description", "icon", "category"];
}

impl From<CreateServiceRequest> for NewService {
    fn from(req: CreateServiceRequest) -> Self {
        Self {
            title: req.title.trim().to_string(),
            description: req.description.trim().to_string(),
            icon: req.icon.trim().to_string(),
            features: req.features,
            category: req.category.trim().to_string(),
            is_active: req.is_active.unwrap_or(true),
        }
    }
}
