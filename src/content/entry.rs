//! Post and Project models

use serde::Serialize;

/// Sort rank for projects without an explicit `order`; they land after every
/// explicitly ordered project in their featured group
pub const UNORDERED_RANK: i64 = 9999;

/// A blog post
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// Stable URL-safe identifier, derived from the file name
    pub slug: String,

    /// Post title, falls back to the slug
    pub title: String,

    /// Publication date in `YYYY-MM-DD` form, empty when absent.
    /// Compared lexically everywhere.
    pub date: String,

    /// Post tags
    pub tags: Vec<String>,

    /// One-line summary for listings
    pub summary: String,

    /// Thumbnail URL or path, `None` means no image
    pub thumbnail: Option<String>,

    /// Raw body, opaque to the index; handed to the markup renderer as-is
    pub body: String,
}

/// A project entry
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    /// Stable URL-safe identifier, derived from the file name
    pub slug: String,

    /// Project title, falls back to the slug
    pub title: String,

    /// Date in `YYYY-MM-DD` form, empty when absent
    pub date: String,

    /// Project tags
    pub tags: Vec<String>,

    /// One-line summary for listings
    pub summary: String,

    /// Thumbnail URL or path, `None` means no image
    pub thumbnail: Option<String>,

    /// Promotes the project to the featured group in listings
    pub featured: bool,

    /// Explicit listing rank within a featured group, lower sorts first
    pub order: Option<i64>,

    /// Repository link
    pub github: Option<String>,

    /// Live demo link
    pub demo: Option<String>,

    /// Publication link
    pub paper: Option<String>,

    /// Raw body, opaque to the index
    pub body: String,
}

impl Project {
    /// Rank used by the listing comparator, `UNORDERED_RANK` when no
    /// explicit `order` is set
    pub fn effective_order(&self) -> i64 {
        self.order.unwrap_or(UNORDERED_RANK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_order_defaults_to_unordered_rank() {
        let project = Project {
            slug: "demo".to_string(),
            title: "Demo".to_string(),
            date: String::new(),
            tags: Vec::new(),
            summary: String::new(),
            thumbnail: None,
            featured: false,
            order: None,
            github: None,
            demo: None,
            paper: None,
            body: String::new(),
        };
        assert_eq!(project.effective_order(), UNORDERED_RANK);
        assert_eq!(
            Project {
                order: Some(2),
                ..project
            }
            .effective_order(),
            2
        );
    }
}
