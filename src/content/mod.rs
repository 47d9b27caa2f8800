//! Content module - front matter extraction, entry models, and the indexer

mod entry;
mod frontmatter;
pub mod loader;
mod markdown;

pub use entry::{Post, Project, UNORDERED_RANK};
pub use frontmatter::FrontMatter;
pub use loader::ContentLoader;
pub use markdown::MarkdownRenderer;

use thiserror::Error;

/// Errors from content extraction
///
/// A non-numeric `order` value is deliberately not an error: it is coerced
/// to absent during front-matter parsing.
#[derive(Error, Debug)]
pub enum ContentError {
    /// No backing file for the requested slug
    #[error("no {category} found with slug '{slug}'")]
    NotFound {
        category: &'static str,
        slug: String,
    },

    /// Front matter could not be parsed into key/value pairs
    #[error("malformed front matter in '{slug}': {source}")]
    Malformed {
        slug: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// The backing file exists but could not be read
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
