//! Initialize an empty content store

use anyhow::Result;
use std::path::Path;

use crate::store::{ContentStore, JsonFileStore};

/// Create the data directory and an empty posts document
pub async fn run(path: &Path) -> Result<()> {
    if path.exists() {
        println!("Content store already exists: {:?}", path);
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    JsonFileStore::new(path).write_all(&[]).await?;
    println!("Initialized empty content store at {:?}", path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_creates_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("posts.json");

        run(&path).await.unwrap();

        let posts = JsonFileStore::new(&path).read_all().await.unwrap();
        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn test_init_leaves_existing_store_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.json");
        std::fs::write(&path, r#"[{"slug":"a","title":"A"}]"#).unwrap();

        run(&path).await.unwrap();

        let posts = JsonFileStore::new(&path).read_all().await.unwrap();
        assert_eq!(posts.len(), 1);
    }
}
