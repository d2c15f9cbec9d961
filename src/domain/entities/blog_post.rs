//! Blog post entity with its author and comment references.

use chrono::{DateTime, Utc};

/// Public profile of a user referenced by a post or comment.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub avatar: Option<String>,
}

/// A reader comment attached to a blog post.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i64,
    pub user: Option<Author>,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A blog post.
///
/// `comments` is `None` when the post was loaded by a list query; detail
/// lookups always populate it (possibly with an empty vector).
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub featured_image: String,
    pub category: String,
    pub read_time: i32,
    pub is_published: bool,
    pub published_at: DateTime<Utc>,
    pub views: i64,
    pub tags: Vec<String>,
    pub author: Option<Author>,
    pub comments: Option<Vec<Comment>>,
}

/// Input data for creating a new blog post.
#[derive(Debug, Clone)]
pub struct NewBlogPost {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub featured_image: String,
    pub category: String,
    pub read_time: i32,
    pub is_published: bool,
    pub published_at: DateTime<Utc>,
    pub views: i64,
    pub tags: Vec<String>,
    pub author_id: Option<i64>,
}

/// Filter applied when listing blog posts.
///
/// Listing is always scoped to published posts. `search` is matched as a
/// case-insensitive substring against the title, the excerpt and every tag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

impl BlogQuery {
    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    pub fn with_search(mut self, search: Option<String>) -> Self {
        self.search = search;
        self
    }

    /// Returns true if the post satisfies the query.
    pub fn matches(&self, post: &BlogPost) -> bool {
        if !post.is_published {
            return false;
        }

        if let Some(category) = &self.category
            && &post.category != category
        {
            return false;
        }

        match &self.search {
            None => true,
            Some(search) => {
                let needle = search.to_lowercase();
                post.title.to_lowercase().contains(&needle)
                    || post.excerpt.to_lowercase().contains(&needle)
                    || post
                        .tags
                        .iter()
                        .any(|tag| tag.to_lowercase().contains(&needle))
            }
        }
    }
}

/// One page of a blog listing together with the total number of matches.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPage {
    pub posts: Vec<BlogPost>,
    pub page: u32,
    pub limit: u32,
    pub total: i64,
}

impl BlogPage {
    /// Wraps a complete, unpaginated list as a single page.
    pub fn unpaginated(posts: Vec<BlogPost>) -> Self {
        let total = posts.len() as i64;
        Self {
            limit: (posts.len() as u32).max(1),
            posts,
            page: 1,
            total,
        }
    }

    pub fn total_pages(&self) -> u32 {
        if self.limit == 0 {
            return 0;
        }
        (self.total as u64).div_ceil(self.limit as u64) as u32
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, tags: &[&str], is_published: bool) -> BlogPost {
        BlogPost {
            id: 1,
            title: title.to_string(),
            excerpt: "An excerpt about farming".to_string(),
            content: "Body".to_string(),
            featured_image: String::new(),
            category: "Technology".to_string(),
            read_time: 5,
            is_published,
            published_at: Utc::now(),
            views: 0,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            author: None,
            comments: None,
        }
    }

    #[test]
    fn test_query_skips_unpublished() {
        let query = BlogQuery::default();
        assert!(query.matches(&post("Drones", &[], true)));
        assert!(!query.matches(&post("Drones", &[], false)));
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let query = BlogQuery::default().with_search(Some("MACHINE".to_string()));
        assert!(query.matches(&post("Intro", &["Machine Learning"], true)));
        assert!(query.matches(&post("machine vision", &[], true)));
        assert!(!query.matches(&post("Soil", &["Compost"], true)));

        let by_excerpt = BlogQuery::default().with_search(Some("farming".to_string()));
        assert!(by_excerpt.matches(&post("Soil", &[], true)));
    }

    #[test]
    fn test_category_must_match_exactly() {
        let query = BlogQuery::default().with_category(Some("Technology".to_string()));
        assert!(query.matches(&post("Drones", &[], true)));

        let other = BlogQuery::default().with_category(Some("Analytics".to_string()));
        assert!(!other.matches(&post("Drones", &[], true)));
    }

    #[test]
    fn test_page_math() {
        let page = BlogPage {
            posts: vec![],
            page: 2,
            limit: 10,
            total: 25,
        };
        assert_eq!(page.total_pages(), 3);
        assert!(page.has_next());
        assert!(page.has_prev());

        let last = BlogPage { page: 3, ..page };
        assert!(!last.has_next());
    }

    #[test]
    fn test_page_math_exact_multiple() {
        let page = BlogPage {
            posts: vec![],
            page: 1,
            limit: 5,
            total: 10,
        };
        assert_eq!(page.total_pages(), 2);
        assert!(page.has_next());
        assert!(!page.has_prev());
    }

    #[test]
    fn test_unpaginated_is_single_page() {
        let page = BlogPage::unpaginated(vec![post("A", &[], true), post("B", &[], true)]);
        assert_eq!(page.page, 1);
        assert_eq!(page.total, 2);
        assert_eq!(page.total_pages(), 1);
        assert!(!page.has_next());
        assert!(!page.has_prev());
    }
}
