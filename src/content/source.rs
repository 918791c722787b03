//! Content sources - where post paths and their metadata come from

use std::future::Future;
use std::path::{Component, Path, PathBuf};

use super::PostMetadata;
use crate::error::PostError;

/// A collection of post files that can be enumerated and lazily resolved
///
/// `discover` lists logical paths (base-relative, `/`-separated, with a
/// leading `/`). `resolve` reads one path's front-matter and may suspend.
pub trait ContentSource: Send + Sync + 'static {
    /// List the logical paths of all matching post files
    fn discover(&self) -> Result<Vec<String>, PostError>;

    /// Resolve the metadata of one discovered path
    fn resolve(&self, path: &str) -> impl Future<Output = Result<PostMetadata, PostError>> + Send;
}

/// Markdown files on disk matched by a glob pattern
#[derive(Debug, Clone)]
pub struct FsContentSource {
    base_dir: PathBuf,
    pattern: String,
}

impl FsContentSource {
    /// Create a source matching `pattern` (relative to `base_dir`)
    pub fn new<P: AsRef<Path>>(base_dir: P, pattern: &str) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            pattern: pattern.trim_start_matches('/').to_string(),
        }
    }

    /// Map a logical path back to the file on disk
    pub fn physical_path(&self, logical: &str) -> PathBuf {
        logical
            .trim_start_matches('/')
            .split('/')
            .fold(self.base_dir.clone(), |dir, part| dir.join(part))
    }

    /// Render a file path the way it is reported by `discover`
    ///
    /// Logical paths are mapped back to files by `physical_path`, so every
    /// component must be valid UTF-8.
    fn logical_path(&self, path: &Path) -> Result<String, PostError> {
        let relative = path.strip_prefix(&self.base_dir).unwrap_or(path);
        let mut logical = String::new();
        for component in relative.components() {
            if let Component::Normal(part) = component {
                let part = part.to_str().ok_or_else(|| PostError::NonUtf8Path {
                    path: path.to_path_buf(),
                })?;
                logical.push('/');
                logical.push_str(part);
            }
        }
        Ok(logical)
    }

    /// The base directory escaped for glob, followed by the configured pattern
    fn full_pattern(&self) -> String {
        let base = self.base_dir.to_string_lossy();
        format!(
            "{}/{}",
            glob::Pattern::escape(base.trim_end_matches('/')),
            self.pattern
        )
    }
}

impl ContentSource for FsContentSource {
    fn discover(&self) -> Result<Vec<String>, PostError> {
        let full_pattern = self.full_pattern();

        let entries = glob::glob(&full_pattern).map_err(|source| PostError::Pattern {
            pattern: self.pattern.clone(),
            source,
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry?;
            if path.is_file() {
                let logical = self.logical_path(&path)?;
                tracing::debug!("Discovered {}", logical);
                paths.push(logical);
            }
        }

        Ok(paths)
    }

    fn resolve(&self, path: &str) -> impl Future<Output = Result<PostMetadata, PostError>> + Send {
        let file = self.physical_path(path);
        let logical = path.to_string();

        async move {
            let content = tokio::fs::read_to_string(&file)
                .await
                .map_err(|source| PostError::Io {
                    path: file.clone(),
                    source,
                })?;

            let (meta, _body) = PostMetadata::parse(&content)
                .map_err(|source| PostError::FrontMatter {
                    path: logical,
                    source,
                })?;

            Ok(meta)
        }
    }
}
