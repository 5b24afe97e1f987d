//! Post model, creation payload and patch semantics

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Publication state of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
}

impl Default for PostStatus {
    fn default() -> Self {
        PostStatus::Draft
    }
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
        }
    }
}

/// A blog post as stored in the content document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Post {
    /// Unique URL-safe identifier
    pub slug: String,

    /// Post title
    pub title: String,

    /// Short summary shown in listings
    pub excerpt: String,

    /// Markdown body
    pub content: String,

    /// Post tags, insertion order preserved
    pub tags: Vec<String>,

    /// Publication date string (e.g. "2026-08-30")
    pub published_at: String,

    /// Free-form read time (e.g. "5 min")
    pub read_time: String,

    /// Draft or published
    pub status: PostStatus,
}

/// Validation failures for incoming post payloads
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("slug is not URL-safe: {0:?}")]
    InvalidSlug(String),
}

/// A slug is valid when slugification leaves it untouched
pub fn is_url_safe(slug: &str) -> bool {
    !slug.is_empty() && slug::slugify(slug) == slug
}

/// Incoming payload for post creation
///
/// `slug` and `title` are required; everything else defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewPost {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub excerpt: String,
    pub content: String,
    pub tags: Vec<String>,
    pub published_at: String,
    pub read_time: String,
    pub status: PostStatus,
}

impl NewPost {
    /// Validate and turn the payload into a `Post`
    pub fn into_post(self) -> Result<Post, ValidationError> {
        let slug = self
            .slug
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::MissingField("slug"))?;
        let title = self
            .title
            .filter(|t| !t.is_empty())
            .ok_or(ValidationError::MissingField("title"))?;

        if !is_url_safe(&slug) {
            return Err(ValidationError::InvalidSlug(slug));
        }

        Ok(Post {
            slug,
            title,
            excerpt: self.excerpt,
            content: self.content,
            tags: self.tags,
            published_at: self.published_at,
            read_time: self.read_time,
            status: self.status,
        })
    }
}

/// Shallow-merge update for a stored post
///
/// Only the fields listed here may be patched; unknown fields are a
/// deserialization error rather than being spread onto the record.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PostPatch {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub published_at: Option<String>,
    pub read_time: Option<String>,
    pub status: Option<PostStatus>,
}

impl PostPatch {
    /// Apply the present fields over an existing post
    pub fn apply(self, post: &mut Post) {
        if let Some(slug) = self.slug {
            post.slug = slug;
        }
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(excerpt) = self.excerpt {
            post.excerpt = excerpt;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        if let Some(tags) = self.tags {
            post.tags = tags;
        }
        if let Some(published_at) = self.published_at {
            post.published_at = published_at;
        }
        if let Some(read_time) = self.read_time {
            post.read_time = read_time;
        }
        if let Some(status) = self.status {
            post.status = status;
        }
    }
}
