//! Selection views - derived queries over already-loaded listings
//!
//! Pure functions: they never touch the file system and rely on the loader
//! having already applied the listing order.

use serde::Serialize;

use crate::content::{Post, Project};

/// Display-oriented summary of an entry, as shown on the home page
#[derive(Debug, Clone, Serialize)]
pub struct Card {
    pub title: String,
    pub description: String,
    /// Root-relative link to the detail view
    pub href: String,
    /// One-line context string: date plus first tag for posts, a featured
    /// marker or date for projects
    pub meta: String,
    pub thumbnail: Option<String>,
}

/// Reshape the first `limit` posts into cards
///
/// Expects the date-descending order produced by the loader. A `limit`
/// larger than the collection returns the whole collection.
pub fn recent_posts(posts: &[Post], limit: usize) -> Vec<Card> {
    posts
        .iter()
        .take(limit)
        .map(|p| Card {
            title: p.title.clone(),
            description: p.summary.clone(),
            href: format!("/blog/{}", p.slug),
            meta: match p.tags.first() {
                Some(tag) => format!("{} · {}", p.date, tag),
                None => p.date.clone(),
            },
            thumbnail: p.thumbnail.clone(),
        })
        .collect()
}

/// Reshape the first `limit` projects into cards
///
/// Expects the featured/order/date listing order produced by the loader.
pub fn highlighted_projects(projects: &[Project], limit: usize) -> Vec<Card> {
    projects
        .iter()
        .take(limit)
        .map(|p| Card {
            title: p.title.clone(),
            description: p.summary.clone(),
            href: format!("/projects/{}", p.slug),
            meta: if p.featured {
                "Featured Project".to_string()
            } else {
                p.date.clone()
            },
            thumbnail: p.thumbnail.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str, date: &str, tags: &[&str]) -> Post {
        Post {
            slug: slug.to_string(),
            title: format!("Post {}", slug),
            date: date.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            summary: "A summary.".to_string(),
            thumbnail: None,
            body: String::new(),
        }
    }

    fn project(slug: &str, date: &str, featured: bool) -> Project {
        Project {
            slug: slug.to_string(),
            title: format!("Project {}", slug),
            date: date.to_string(),
            tags: Vec::new(),
            summary: "A summary.".to_string(),
            thumbnail: None,
            featured,
            order: None,
            github: None,
            demo: None,
            paper: None,
            body: String::new(),
        }
    }

    #[test]
    fn test_recent_posts_takes_newest_two() {
        // Loader order: date descending
        let posts = vec![
            post("apr", "2024-04-01", &[]),
            post("mar", "2024-03-01", &[]),
            post("feb", "2024-02-01", &[]),
            post("jan", "2024-01-01", &[]),
        ];

        let cards = recent_posts(&posts, 2);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].href, "/blog/apr");
        assert_eq!(cards[1].href, "/blog/mar");
    }

    #[test]
    fn test_post_meta_combines_date_and_first_tag() {
        let posts = vec![post("tagged", "2024-04-01", &["rust", "notes"])];
        let cards = recent_posts(&posts, 1);
        assert_eq!(cards[0].meta, "2024-04-01 · rust");

        let posts = vec![post("untagged", "2024-04-01", &[])];
        let cards = recent_posts(&posts, 1);
        assert_eq!(cards[0].meta, "2024-04-01");
    }

    #[test]
    fn test_highlighted_project_meta() {
        let projects = vec![
            project("starred", "2024-01-01", true),
            project("plain", "2024-02-01", false),
        ];

        let cards = highlighted_projects(&projects, 2);
        assert_eq!(cards[0].meta, "Featured Project");
        assert_eq!(cards[1].meta, "2024-02-01");
        assert_eq!(cards[0].href, "/projects/starred");
    }

    #[test]
    fn test_limit_beyond_collection_returns_everything() {
        let posts = vec![post("only", "2024-01-01", &[])];
        assert_eq!(recent_posts(&posts, 10).len(), 1);

        let projects = vec![project("only", "2024-01-01", false)];
        assert_eq!(highlighted_projects(&projects, 10).len(), 1);
    }
}
