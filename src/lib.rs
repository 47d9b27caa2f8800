//! folio-rs: a content index for MDX-based personal sites
//!
//! This crate discovers content files (posts, projects), extracts the
//! front-matter metadata embedded in each file, and produces ordered
//! listings plus small derived views ("recent posts", "highlighted
//! projects"). Bodies stay opaque to the index and are handed to the
//! markdown renderer only when a detail view needs markup.

pub mod config;
pub mod content;
pub mod views;

use anyhow::Result;
use std::path::Path;

/// Name of the optional configuration file at the site base directory
const CONFIG_FILE: &str = "folio.yml";

/// A site rooted at a base directory
///
/// Holds the configuration and the resolved content roots. All content
/// reads go through these paths; nothing in the crate reads the process
/// working directory on its own.
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Directory holding post files
    pub posts_dir: std::path::PathBuf,
    /// Directory holding project files
    pub projects_dir: std::path::PathBuf,
}

impl Site {
    /// Create a new site from a base directory
    ///
    /// Reads `folio.yml` from the base directory when present, otherwise
    /// falls back to the default configuration.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let posts_dir = base_dir.join(&config.posts_dir);
        let projects_dir = base_dir.join(&config.projects_dir);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
            projects_dir,
        })
    }

    /// Create a content loader over this site
    pub fn loader(&self) -> content::ContentLoader<'_> {
        content::ContentLoader::new(self)
    }
}
