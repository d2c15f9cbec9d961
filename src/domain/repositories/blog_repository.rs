//! Repository trait for blog post data access.

use crate::domain::entities::{BlogPost, BlogQuery, NewBlogPost};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for blog posts.
///
/// List queries populate the author but leave `comments` as `None`;
/// [`BlogRepository::find_by_id`] populates both.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Lists published posts matching the query, newest first.
    ///
    /// # Arguments
    ///
    /// - `offset` - Number of matching posts to skip
    /// - `limit` - Maximum number of posts to return
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find(
        &self,
        query: &BlogQuery,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<BlogPost>, AppError>;

    /// Counts published posts matching the query.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn count(&self, query: &BlogQuery) -> Result<i64, AppError>;

    /// Finds a post by id with its author and comments expanded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<BlogPost>, AppError>;

    /// Atomically increments the view counter of a post.
    ///
    /// Returns the new counter value, or `None` if the post does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn increment_views(&self, id: i64) -> Result<Option<i64>, AppError>;

    /// Creates a new post.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn create(&self, new_post: NewBlogPost) -> Result<BlogPost, AppError>;
}
