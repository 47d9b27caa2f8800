//! Content loader - enumerates backing files and builds ordered listings

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{ContentError, FrontMatter, Post, Project};
use crate::Site;

/// Recognized content-file extension
const CONTENT_EXT: &str = "mdx";

/// Loads posts and projects from the configured content roots
///
/// Entries are built fresh on every call; there is no cache. Listing calls
/// skip entries that fail extraction (with a warning) so one corrupt file
/// cannot take down a whole listing, while the single-entry loaders surface
/// the failure directly.
pub struct ContentLoader<'a> {
    site: &'a Site,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Load all posts, sorted by date descending
    ///
    /// Ties on equal (or empty) dates are broken by slug ascending, so the
    /// listing order is fully defined.
    pub fn load_posts(&self) -> Result<Vec<Post>, ContentError> {
        let mut posts = Vec::new();

        for slug in enumerate_slugs(&self.site.posts_dir) {
            match self.load_post(&slug) {
                Ok(post) => posts.push(post),
                Err(e) => {
                    tracing::warn!("Skipping post '{}': {}", slug, e);
                }
            }
        }

        posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));

        tracing::debug!("Loaded {} posts", posts.len());
        Ok(posts)
    }

    /// Load a single post by slug
    pub fn load_post(&self, slug: &str) -> Result<Post, ContentError> {
        let path = self.site.posts_dir.join(format!("{}.{}", slug, CONTENT_EXT));
        if !path.is_file() {
            return Err(ContentError::NotFound {
                category: "post",
                slug: slug.to_string(),
            });
        }

        let raw = fs::read_to_string(&path)?;
        let (fm, body) = FrontMatter::parse(&raw).map_err(|source| ContentError::Malformed {
            slug: slug.to_string(),
            source,
        })?;

        Ok(Post {
            slug: slug.to_string(),
            title: fm.title.unwrap_or_else(|| slug.to_string()),
            date: fm.date.unwrap_or_default(),
            tags: fm.tags,
            summary: fm.summary.unwrap_or_default(),
            thumbnail: fm.thumbnail.filter(|t| !t.is_empty()),
            body: body.to_string(),
        })
    }

    /// Load all projects in display order
    ///
    /// Featured projects sort first; within a featured group projects sort
    /// by explicit `order` ascending (absent ranks last), then by date
    /// descending, then by slug ascending.
    pub fn load_projects(&self) -> Result<Vec<Project>, ContentError> {
        let mut projects = Vec::new();

        for slug in enumerate_slugs(&self.site.projects_dir) {
            match self.load_project(&slug) {
                Ok(project) => projects.push(project),
                Err(e) => {
                    tracing::warn!("Skipping project '{}': {}", slug, e);
                }
            }
        }

        projects.sort_by(|a, b| {
            b.featured
                .cmp(&a.featured)
                .then_with(|| a.effective_order().cmp(&b.effective_order()))
                .then_with(|| b.date.cmp(&a.date))
                .then_with(|| a.slug.cmp(&b.slug))
        });

        tracing::debug!("Loaded {} projects", projects.len());
        Ok(projects)
    }

    /// Load a single project by slug
    pub fn load_project(&self, slug: &str) -> Result<Project, ContentError> {
        let path = self
            .site
            .projects_dir
            .join(format!("{}.{}", slug, CONTENT_EXT));
        if !path.is_file() {
            return Err(ContentError::NotFound {
                category: "project",
                slug: slug.to_string(),
            });
        }

        let raw = fs::read_to_string(&path)?;
        let (fm, body) = FrontMatter::parse(&raw).map_err(|source| ContentError::Malformed {
            slug: slug.to_string(),
            source,
        })?;

        Ok(Project {
            slug: slug.to_string(),
            title: fm.title.unwrap_or_else(|| slug.to_string()),
            date: fm.date.unwrap_or_default(),
            tags: fm.tags,
            summary: fm.summary.unwrap_or_default(),
            thumbnail: fm.thumbnail.filter(|t| !t.is_empty()),
            featured: fm.featured,
            order: fm.order,
            github: fm.github.filter(|s| !s.is_empty()),
            demo: fm.demo.filter(|s| !s.is_empty()),
            paper: fm.paper.filter(|s| !s.is_empty()),
            body: body.to_string(),
        })
    }
}

/// Enumerate slugs for a category root: one per content file, flat namespace
/// only (no recursion into subdirectories)
fn enumerate_slugs(dir: &Path) -> Vec<String> {
    if !dir.exists() {
        return Vec::new();
    }

    WalkDir::new(dir)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file() && is_content_file(e.path()))
        .filter_map(|e| e.path().file_stem().and_then(|s| s.to_str()).map(String::from))
        .collect()
}

/// Check if a file carries the recognized content extension
fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == CONTENT_EXT)
        .unwrap_or(false)
}
