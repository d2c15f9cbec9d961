//! Blog listing and detail retrieval.

use std::sync::Arc;

use crate::domain::catalog::Catalog;
use crate::domain::entities::{BlogPage, BlogPost, BlogQuery};
use crate::domain::repositories::BlogRepository;
use crate::domain::served::{FallbackReason, Served};
use crate::error::AppError;

/// Requested page of a listing (1-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_LIMIT: u32 = 10;
    pub const MAX_LIMIT: u32 = 100;

    /// Builds a page request, replacing missing or non-positive values with
    /// the defaults and capping the limit.
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = page
            .filter(|p| *p >= 1)
            .and_then(|p| u32::try_from(p).ok())
            .unwrap_or(Self::DEFAULT_PAGE);
        let limit = limit
            .filter(|l| *l >= 1)
            .map(|l| l.min(Self::MAX_LIMIT as i64) as u32)
            .unwrap_or(Self::DEFAULT_LIMIT);
        Self { page, limit }
    }

    pub fn offset(&self) -> i64 {
        (self.page as i64 - 1) * self.limit as i64
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Service for the blog.
pub struct BlogService {
    repository: Arc<dyn BlogRepository>,
    catalog: Arc<Catalog>,
}

impl BlogService {
    /// Creates a new blog service.
    pub fn new(repository: Arc<dyn BlogRepository>, catalog: Arc<Catalog>) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    /// Lists one page of published posts matching the query, newest first.
    ///
    /// Runs the page query and the count query concurrently. If nothing in
    /// the store matches, or either query fails, the full fallback catalog is
    /// returned as a single unpaginated page. An out-of-range page of a
    /// non-empty result is returned as an empty store page.
    pub async fn list(&self, query: BlogQuery, page: PageRequest) -> Served<BlogPage> {
        let result = tokio::try_join!(
            self.repository
                .find(&query, page.offset(), page.limit as i64),
            self.repository.count(&query)
        );

        match result {
            Ok((posts, total)) if total > 0 => Served::Store(BlogPage {
                posts,
                page: page.page,
                limit: page.limit,
                total,
            }),
            Ok(_) => {
                tracing::debug!(?query, "No blog posts in store, serving fallback catalog");
                self.fallback(FallbackReason::Empty)
            }
            Err(e) => {
                tracing::warn!(error = %e, ?query, "Blog query failed, serving fallback catalog");
                self.fallback(FallbackReason::Unavailable)
            }
        }
    }

    fn fallback(&self, reason: FallbackReason) -> Served<BlogPage> {
        Served::fallback(
            BlogPage::unpaginated(self.catalog.blog_posts.clone()),
            reason,
        )
    }

    /// Retrieves a post with its author and comments, counting the view.
    ///
    /// The view increment is best-effort: a failure is logged and the post is
    /// returned with the counter as read. A missing post is never counted.
    /// Negative ids name fallback catalog posts; they are answered from the
    /// catalog and never counted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no post has this id.
    /// Returns [`AppError::Internal`] if the lookup fails.
    pub async fn get(&self, id: i64) -> Result<BlogPost, AppError> {
        if Catalog::owns_id(id) {
            return self
                .catalog
                .find_blog_post(id)
                .cloned()
                .ok_or_else(|| AppError::not_found("Blog not found"));
        }

        let mut post = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, id, "Get blog error");
                AppError::internal("Server error while fetching blog")
            })?
            .ok_or_else(|| AppError::not_found("Blog not found"))?;

        match self.repository.increment_views(id).await {
            Ok(Some(views)) => post.views = views,
            Ok(None) => tracing::debug!(id, "Blog post vanished before view increment"),
            Err(e) => tracing::warn!(error = %e, id, "Failed to increment blog views"),
        }

        Ok(post)
    }
}
