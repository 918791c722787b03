//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,

    // Directory
    pub public_dir: String,

    // Posts
    #[serde(default)]
    pub posts: PostsConfig,

    // Preprocessing and anything else the rendering layer reads
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            description: String::new(),
            public_dir: "public".to_string(),
            posts: PostsConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {:?}", path))?;
        Ok(config)
    }
}

/// Where posts live and how their slugs are derived
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PostsConfig {
    /// Glob relative to the site directory
    pub pattern: String,
    /// Removed from the front of each discovered path
    pub strip_prefix: String,
    /// Removed from the end of each discovered path
    pub strip_suffix: String,
    /// Reject posts whose date is not `YYYY-MM-DD...`
    pub strict_dates: bool,
}

impl Default for PostsConfig {
    fn default() -> Self {
        Self {
            pattern: "src/routes/posts/**/*.md".to_string(),
            strip_prefix: "/src/routes".to_string(),
            strip_suffix: "+page.md".to_string(),
            strict_dates: false,
        }
    }
}
