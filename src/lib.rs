//! folio-rs: a blog authoring tool for personal portfolio sites
//!
//! This crate maintains the content store of a static portfolio site
//! (an ordered list of blog-post records the rendering layer imports
//! directly) and scaffolds the content files for each new post.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;

use anyhow::Result;
use std::path::Path;

/// The main Folio application
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Path to the blog store file
    pub store_path: std::path::PathBuf,
    /// Root directory for per-post content folders
    pub posts_dir: std::path::PathBuf,
}

impl Folio {
    /// Create a new Folio instance from a site directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let store_path = base_dir.join(&config.store_file);
        let posts_dir = base_dir.join(&config.posts_dir);

        Ok(Self {
            config,
            base_dir,
            store_path,
            posts_dir,
        })
    }

    /// The content store backing this site
    pub fn store(&self) -> content::BlogStore {
        content::BlogStore::new(&self.store_path)
    }

    /// Content directory for a post, from the directory part of its slug
    pub fn post_dir(&self, slug: &str) -> std::path::PathBuf {
        self.posts_dir.join(slug)
    }

    /// Create a new post from already-collected answers
    pub fn create_post(&self, answers: &commands::new::PostAnswers) -> Result<()> {
        commands::new::create_post(self, answers)
    }
}
