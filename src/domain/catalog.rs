//! Fallback catalog served when the store is empty or unavailable.
//!
//! The catalog is built once at startup and shared read-only through
//! [`crate::state::AppState`]. It is never written back to the store, except
//! through the explicit `admin seed` command.
//!
//! Catalog records carry negative ids. Store ids are always positive, so a
//! detail request for a catalog record can never reach a stored row.

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::entities::{BlogPost, NewBlogPost, NewService, Service};

/// Immutable sample services and blog posts.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub services: Vec<Service>,
    pub blog_posts: Vec<BlogPost>,
}

impl Catalog {
    /// Builds the built-in sample catalog (6 services, 3 blog posts).
    pub fn sample() -> Self {
        Self {
            services: sample_services(),
            blog_posts: sample_blog_posts(),
        }
    }

    /// Looks up a catalog service by its (negative) id.
    pub fn find_service(&self, id: i64) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    /// Looks up a catalog blog post by its (negative) id.
    pub fn find_blog_post(&self, id: i64) -> Option<&BlogPost> {
        self.blog_posts.iter().find(|p| p.id == id)
    }

    /// Whether `id` belongs to the catalog range rather than the store's.
    pub fn owns_id(id: i64) -> bool {
        id < 0
    }

    /// Creation inputs for copying the services into an empty store.
    pub fn new_services(&self) -> Vec<NewService> {
        self.services
            .iter()
            .map(|s| NewService {
                title: s.title.clone(),
                description: s.description.clone(),
                icon: s.icon.clone(),
                features: s.features.clone(),
                category: s.category.clone(),
                is_active: s.is_active,
            })
            .collect()
    }

    /// Creation inputs for copying the blog posts into an empty store.
    pub fn new_blog_posts(&self) -> Vec<NewBlogPost> {
        self.blog_posts
            .iter()
            .map(|p| NewBlogPost {
                title: p.title.clone(),
                excerpt: p.excerpt.clone(),
                content: p.content.clone(),
                featured_image: p.featured_image.clone(),
                category: p.category.clone(),
                read_time: p.read_time,
                is_published: p.is_published,
                published_at: p.published_at,
                views: p.views,
                tags: p.tags.clone(),
                author_id: None,
            })
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn service(
    id: i64,
    title: &str,
    description: &str,
    icon: &str,
    features: &[&str],
    category: &str,
) -> Service {
    Service {
        id,
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        features: strings(features),
        category: category.to_string(),
        is_active: true,
        created_at: date(2024, 1, 1),
    }
}

fn sample_services() -> Vec<Service> {
    vec![
        service(
            -1,
            "Smart Crop Monitoring",
            "Utilizing drones and IoT sensors to monitor crop health, soil conditions, and environmental factors in real-time.",
            "fas fa-seedling",
            &["Real-time monitoring", "Drone technology", "IoT sensors", "Predictive analytics"],
            "Monitoring",
        ),
        service(
            -2,
            "Precision Irrigation",
            "Automated irrigation systems that deliver water precisely when and where it's needed, reducing waste by up to 50%.",
            "fas fa-tint",
            &["Water conservation", "Automated systems", "Smart scheduling", "Soil moisture sensors"],
            "Irrigation",
        ),
        service(
            -3,
            "Automated Farming",
            "Robotic systems for planting, weeding, and harvesting that increase efficiency and reduce labor costs.",
            "fas fa-robot",
            &["Robotic harvesters", "Automated planting", "Weed detection", "Labor optimization"],
            "Automation",
        ),
        service(
            -4,
            "Data Analytics",
            "Advanced analytics platforms that transform farm data into actionable insights for better decision-making.",
            "fas fa-chart-line",
            &["Data visualization", "Predictive analytics", "Yield optimization", "Market insights"],
            "Analytics",
        ),
        service(
            -5,
            "Sustainable Practices",
            "Implementing regenerative agriculture techniques that improve soil health and biodiversity.",
            "fas fa-leaf",
            &["Soil health management", "Biodiversity conservation", "Carbon sequestration", "Organic farming"],
            "Sustainability",
        ),
        service(
            -6,
            "Farmer Education",
            "Training programs and workshops to help farmers adopt new technologies and sustainable practices.",
            "fas fa-graduation-cap",
            &["Workshops", "Online courses", "Field demonstrations", "Expert consultations"],
            "Education",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn blog_post(
    id: i64,
    title: &str,
    excerpt: &str,
    content: &str,
    featured_image: &str,
    category: &str,
    read_time: i32,
    published_at: DateTime<Utc>,
    views: i64,
    tags: &[&str],
) -> BlogPost {
    BlogPost {
        id,
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        content: content.to_string(),
        featured_image: featured_image.to_string(),
        category: category.to_string(),
        read_time,
        is_published: true,
        published_at,
        views,
        tags: strings(tags),
        author: None,
        comments: None,
    }
}

fn sample_blog_posts() -> Vec<BlogPost> {
    vec![
        blog_post(
            -1,
            "The Future of Precision Agriculture",
            "Exploring how AI and machine learning are revolutionizing farming practices and increasing efficiency.",
            "This is a detailed article about how precision agriculture is transforming modern farming...",
            "https://images.unsplash.com/photo-1592982537447-7448a57fbab7?ixlib=rb-4.0.3&auto=format&fit=crop&w=1170&q=80",
            "Technology",
            5,
            date(2024, 6, 15),
            150,
            &["AI", "Machine Learning", "Precision Farming"],
        ),
        blog_post(
            -2,
            "Sustainable Farming Practices for the 21st Century",
            "How regenerative agriculture can restore soil health and combat climate change.",
            "Learn about sustainable farming methods that benefit both the environment and crop yields...",
            "https://images.unsplash.com/photo-1574943320219-553eb213f72d?ixlib=rb-4.0.3&auto=format&fit=crop&w=1170&q=80",
            "Sustainability",
            7,
            date(2024, 5, 28),
            89,
            &["Sustainability", "Regenerative Agriculture", "Soil Health"],
        ),
        blog_post(
            -3,
            "Harnessing Data for Smarter Farming Decisions",
            "How data analytics is transforming agricultural decision-making and increasing yields.",
            "Discover how data-driven insights are helping farmers make better decisions...",
            "https://images.unsplash.com/photo-1551288049-bebda4e38f71?ixlib=rb-4.0.3&auto=format&fit=crop&w=1170&q=80",
            "Analytics",
            6,
            date(2024, 4, 12),
            120,
            &["Data Analytics", "Smart Farming", "Yield Optimization"],
        ),
    ]
}
