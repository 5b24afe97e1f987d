//! List stored posts

use anyhow::Result;

use crate::store::{ContentStore, JsonFileStore};

/// Print the stored posts
pub async fn run(store: &JsonFileStore) -> Result<()> {
    let posts = store.read_all().await?;

    println!("Posts ({}):", posts.len());
    for post in posts {
        println!(
            "  {} - {} [{}]",
            post.published_at,
            post.title,
            post.status.as_str()
        );
    }

    Ok(())
}
