//! postlist: discovers markdown blog posts and lists them newest first
//!
//! Posts are found with a glob, their front-matter is read concurrently and
//! the resulting entries are ordered by date for the listing page.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;

use anyhow::Result;
use std::path::Path;

use content::{FsContentSource, PostList, PostLocator};

/// The main blog application
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a Blog instance with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let public_dir = base_dir.join(&config.public_dir);
        Self {
            config,
            base_dir,
            public_dir,
        }
    }

    /// Locate every post and order the list newest first
    pub async fn load_posts(&self) -> Result<PostList> {
        let posts = &self.config.posts;
        let source = FsContentSource::new(&self.base_dir, &posts.pattern);
        let locator = PostLocator::new(source, &posts.strip_prefix, &posts.strip_suffix);

        let entries = locator.locate().await?;
        let list = if posts.strict_dates {
            content::assemble_checked(entries)?
        } else {
            content::assemble(entries)
        };

        Ok(list)
    }

    /// Print the post list
    pub async fn list(&self) -> Result<()> {
        commands::list::run(self).await
    }

    /// Write the post list as JSON
    pub async fn export(&self, output: Option<&Path>) -> Result<()> {
        commands::export::run(self, output).await
    }

    /// Write the HTML listing page
    pub async fn index(&self, output: Option<&Path>) -> Result<()> {
        commands::index::run(self, output).await
    }
}
