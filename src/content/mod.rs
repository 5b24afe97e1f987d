//! Content model for the portfolio blog

pub mod post;

pub use post::{NewPost, Post, PostPatch, PostStatus};

/// Words-per-minute basis for read time estimates
const WORDS_PER_MINUTE: usize = 200;

/// Estimate a human-readable read time for a Markdown body
///
/// # Examples
/// ```ignore
/// estimate_read_time("one two three") // -> "1 min"
/// ```
pub fn estimate_read_time(content: &str) -> String {
    let words = content.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{} min", minutes)
}
