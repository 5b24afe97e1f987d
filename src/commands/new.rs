//! Create a new draft post in the content store

use anyhow::Result;
use std::path::Path;

use crate::content::{estimate_read_time, Post, PostStatus};
use crate::store::{ContentStore, JsonFileStore};

/// Append a draft post with a slugified title
pub async fn run(store: &JsonFileStore, title: &str, body_file: Option<&Path>) -> Result<()> {
    let content = match body_file {
        Some(path) => std::fs::read_to_string(path)?,
        None => String::new(),
    };

    let slug = slug::slugify(title);
    let mut posts = store.read_all().await?;

    if posts.iter().any(|p| p.slug == slug) {
        anyhow::bail!("slug already exists: {}", slug);
    }

    let post = Post {
        slug: slug.clone(),
        title: title.to_string(),
        excerpt: String::new(),
        read_time: estimate_read_time(&content),
        content,
        tags: Vec::new(),
        published_at: chrono::Local::now().format("%Y-%m-%d").to_string(),
        status: PostStatus::Draft,
    };

    posts.push(post);
    store.write_all(&posts).await?;

    println!("Created draft: {}", slug);

    Ok(())
}
