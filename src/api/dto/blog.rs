//! DTOs for the blog endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, NoneAsEmptyString, serde_as};

use crate::application::services::PageRequest;
use crate::domain::entities::{Author, BlogPage, BlogPost, BlogQuery, Comment};

/// Query string of `GET /api/blog`.
///
/// `page` and `limit` are kept as raw strings: values that do not parse as
/// integers fall back to the defaults instead of rejecting the request.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct BlogListParams {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub category: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub search: Option<String>,

    #[serde(default)]
    pub page: Option<String>,

    #[serde(default)]
    pub limit: Option<String>,
}

impl BlogListParams {
    pub fn query(&self) -> BlogQuery {
        BlogQuery::default()
            .with_category(self.category.clone())
            .with_search(self.search.clone())
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(parse_int(&self.page), parse_int(&self.limit))
    }
}

fn parse_int(raw: &Option<String>) -> Option<i64> {
    raw.as_deref().and_then(|s| s.trim().parse().ok())
}

#[serde_as]
#[derive(Debug, Serialize)]
pub struct AuthorResponse {
    #[serde(rename = "_id")]
    #[serde_as(as = "DisplayFromStr")]
    pub id: i64,
    pub name: String,
    pub avatar: Option<String>,
}

impl From<Author> for AuthorResponse {
    fn from(a: Author) -> Self {
        Self {
            id: a.id,
            name: a.name,
            avatar: a.avatar,
        }
    }
}

#[serde_as]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    #[serde(rename = "_id")]
    #[serde_as(as = "DisplayFromStr")]
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<AuthorResponse>,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(c: Comment) -> Self {
        Self {
            id: c.id,
            user: c.user.map(AuthorResponse::from),
            text: c.text,
            created_at: c.created_at,
        }
    }
}

/// A blog post as returned to clients. `comments` is only present on
/// detail responses.
#[serde_as]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostResponse {
    #[serde(rename = "_id")]
    #[serde_as(as = "DisplayFromStr")]
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<CommentResponse>>,
}

impl From<BlogPost> for BlogPostResponse {
    fn from(p: BlogPost) -> Self {
        Self {
            id: p.id,
            title: p.title,
            excerpt: p.excerpt,
            content: p.content,
            featured_image: p.featured_image,
            category: p.category,
            read_time: p.read_time,
            is_published: p.is_published,
            published_at: p.published_at,
            views: p.views,
            tags: p.tags,
            author: p.author.map(AuthorResponse::from),
            comments: p
                .comments
                .map(|comments| comments.into_iter().map(CommentResponse::from).collect()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u32,
    pub total_pages: u32,
    pub total: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

/// `{ success, count, pagination, data }` for `GET /api/blog`.
#[derive(Debug, Serialize)]
pub struct BlogListResponse {
    pub success: bool,
    pub count: usize,
    pub pagination: PaginationMeta,
    pub data: Vec<BlogPostResponse>,
}

impl From<BlogPage> for BlogListResponse {
    fn from(page: BlogPage) -> Self {
        let pagination = PaginationMeta {
            page: page.page,
            total_pages: page.total_pages(),
            total: page.total,
            has_next: page.has_next(),
            has_prev: page.has_prev(),
        };
        let data: Vec<BlogPostResponse> =
            page.posts.into_iter().map(BlogPostResponse::from).collect();

        Self {
            success: true,
            count: data.len(),
            pagination,
            data,
        }
    }
}
