//! PostgreSQL implementation of blog repository.
//!
//! Authors and comment authors are expanded with `LEFT JOIN users`, so a
//! post whose author was deleted is still returned with `author: None`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Author, BlogPost, BlogQuery, Comment, NewBlogPost};
use crate::domain::repositories::BlogRepository;
use crate::error::AppError;

const POST_SELECT: &str = r#"
    SELECT p.id, p.title, p.excerpt, p.content, p.featured_image, p.category,
           p.read_time, p.is_published, p.published_at, p.views, p.tags,
           p.author_id, u.name AS author_name, u.avatar AS author_avatar
    FROM blog_posts p
    LEFT JOIN users u ON u.id = p.author_id
"#;

/// Published posts matching an optional category ($1) and an optional
/// case-insensitive search term ($2).
const PUBLISHED_FILTER: &str = r#"
    WHERE p.is_published
      AND ($1::text IS NULL OR p.category = $1)
      AND (
            $2::text IS NULL
         OR strpos(lower(p.title), lower($2)) > 0
         OR strpos(lower(p.excerpt), lower($2)) > 0
         OR EXISTS (
                SELECT 1 FROM unnest(p.tags) AS t(tag)
                WHERE strpos(lower(t.tag), lower($2)) > 0
            )
      )
"#;

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    title: String,
    excerpt: String,
    content: String,
    featured_image: String,
    category: String,
    read_time: i32,
    is_published: bool,
    published_at: DateTime<Utc>,
    views: i64,
    tags: Vec<String>,
    author_id: Option<i64>,
    author_name: Option<String>,
    author_avatar: Option<String>,
}

impl PostRow {
    fn into_post(self, comments: Option<Vec<Comment>>) -> BlogPost {
        let author = match (self.author_id, self.author_name) {
            (Some(id), Some(name)) => Some(Author {
                id,
                name,
                avatar: self.author_avatar,
            }),
            _ => None,
        };

        BlogPost {
            id: self.id,
            title: self.title,
            excerpt: self.excerpt,
            content: self.content,
            featured_image: self.featured_image,
            category: self.category,
            read_time: self.read_time,
            is_published: self.is_published,
            published_at: self.published_at,
            views: self.views,
            tags: self.tags,
            author,
            comments,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: i64,
    text: String,
    created_at: DateTime<Utc>,
    user_id: Option<i64>,
    user_name: Option<String>,
    user_avatar: Option<String>,
}

impl From<CommentRow> for Comment {
    fn from(r: CommentRow) -> Self {
        let user = match (r.user_id, r.user_name) {
            (Some(id), Some(name)) => Some(Author {
                id,
                name,
                avatar: r.user_avatar,
            }),
            _ => None,
        };

        Comment {
            id: r.id,
            user,
            text: r.text,
            created_at: r.created_at,
        }
    }
}

/// PostgreSQL repository for blog posts and their comments.
pub struct PgBlogRepository {
    pool: Arc<PgPool>,
}

impl PgBlogRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn comments_for(&self, post_id: i64) -> Result<Vec<Comment>, AppError> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT c.id, c.text, c.created_at, c.user_id,
                   u.name AS user_name, u.avatar AS user_avatar
            FROM blog_comments c
            LEFT JOIN users u ON u.id = c.user_id
            WHERE c.post_id = $1
            ORDER BY c.created_at, c.id
            "#,
        )
        .bind(post_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }
}

#[async_trait]
impl BlogRepository for PgBlogRepository {
    async fn find(
        &self,
        query: &BlogQuery,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<BlogPost>, AppError> {
        let sql = format!(
            "{POST_SELECT} {PUBLISHED_FILTER} ORDER BY p.published_at DESC, p.id DESC LIMIT $3 OFFSET $4"
        );

        let rows = sqlx::query_as::<_, PostRow>(&sql)
            .bind(query.category.as_deref())
            .bind(query.search.as_deref())
            .bind(limit)
            .bind(offset)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(|r| r.into_post(None)).collect())
    }

    async fn count(&self, query: &BlogQuery) -> Result<i64, AppError> {
        let sql = format!("SELECT COUNT(*) FROM blog_posts p {PUBLISHED_FILTER}");

        let count = sqlx::query_scalar::<_, i64>(&sql)
            .bind(query.category.as_deref())
            .bind(query.search.as_deref())
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<BlogPost>, AppError> {
        let sql = format!("{POST_SELECT} WHERE p.id = $1");

        let Some(row) = sqlx::query_as::<_, PostRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?
        else {
            return Ok(None);
        };

        let comments = self.comments_for(row.id).await?;
        Ok(Some(row.into_post(Some(comments))))
    }

    async fn increment_views(&self, id: i64) -> Result<Option<i64>, AppError> {
        let views = sqlx::query_scalar::<_, i64>(
            "UPDATE blog_posts SET views = views + 1 WHERE id = $1 RETURNING views",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(views)
    }

    async fn create(&self, new_post: NewBlogPost) -> Result<BlogPost, AppError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO blog_posts (title, excerpt, content, featured_image, category,
                                    read_time, is_published, published_at, views, tags, author_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id
            "#,
        )
        .bind(new_post.title)
        .bind(new_post.excerpt)
        .bind(new_post.content)
        .bind(new_post.featured_image)
        .bind(new_post.category)
        .bind(new_post.read_time)
        .bind(new_post.is_published)
        .bind(new_post.published_at)
        .bind(new_post.views)
        .bind(new_post.tags)
        .bind(new_post.author_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::internal("Created blog post could not be read back"))
    }
}
