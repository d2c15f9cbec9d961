//! Service entity: an offering listed on the marketing site.

use chrono::{DateTime, Utc};

/// A service offered by the company.
///
/// `features` keeps the order in which the bullet points are displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub features: Vec<String>,
    pub category: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Service {
    /// Returns true if the service may be listed publicly.
    pub fn is_public(&self) -> bool {
        self.is_active
    }
}

/// Input data for creating a new service.
#[derive(Debug, Clone)]
pub struct NewService {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub features: Vec<String>,
    pub category: String,
    pub is_active: bool,
}

/// Filter applied when listing services.
///
/// Listing is always scoped to active services.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceFilter {
    pub category: Option<String>,
}

impl ServiceFilter {
    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    /// Returns true if the service satisfies the filter.
    pub fn matches(&self, service: &Service) -> bool {
        service.is_public()
            && self
                .category
                .as_deref()
                .is_none_or(|category| service.category == category)
    }
}
