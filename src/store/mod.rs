//! Content store - durable storage of the post array
//!
//! The store contract is deliberately whole-document: every operation reads
//! or replaces the full post array. The trait exists so the API layer never
//! touches the backing file directly and a proper database can be swapped in
//! later without changing route logic.

mod file;

pub use file::JsonFileStore;

use async_trait::async_trait;

use crate::content::Post;

/// Errors raised by a content store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("content store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("content store holds invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Storage operations over the post array
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Read the full post array; an absent backing document is an empty store
    async fn read_all(&self) -> Result<Vec<Post>, StoreError>;

    /// Replace the full post array
    async fn write_all(&self, posts: &[Post]) -> Result<(), StoreError>;
}
