//! JSON flat-file implementation of the content store

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use super::{ContentStore, StoreError};
use crate::content::Post;

/// Stores the post array as a single pretty-printed JSON document
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait]
impl ContentStore for JsonFileStore {
    async fn read_all(&self) -> Result<Vec<Post>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        let posts = serde_json::from_slice(&bytes)?;
        Ok(posts)
    }

    async fn write_all(&self, posts: &[Post]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(posts)?;

        // Write a sibling temp file first, then rename over the document, so
        // a crash mid-write cannot truncate the store.
        let tmp = self.tmp_path();
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PostStatus;

    fn post(slug: &str) -> Post {
        Post {
            slug: slug.to_string(),
            title: slug.to_uppercase(),
            published_at: "2026-01-01".to_string(),
            status: PostStatus::Published,
            ..Post::default()
        }
    }

    #[tokio::test]
    async fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("posts.json"));
        let posts = store.read_all().await.unwrap();
        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn test_round_trip_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("posts.json"));

        let written = vec![post("c"), post("a"), post("b")];
        store.write_all(&written).await.unwrap();

        let read = store.read_all().await.unwrap();
        assert_eq!(read, written);
    }

    #[tokio::test]
    async fn test_write_replaces_document_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("posts.json"));

        store.write_all(&[post("a"), post("b")]).await.unwrap();
        store.write_all(&[post("c")]).await.unwrap();

        let read = store.read_all().await.unwrap();
        assert_eq!(read, vec![post("c")]);
    }

    #[tokio::test]
    async fn test_invalid_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::new(&path);
        let err = store.read_all().await.unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)));
    }

    #[tokio::test]
    async fn test_no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("posts.json"));
        store.write_all(&[post("a")]).await.unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("posts.json")]);
    }
}
