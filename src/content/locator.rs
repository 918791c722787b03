//! Post locator - discovers post files and resolves their metadata concurrently

use std::sync::Arc;
use tokio::task::JoinSet;

use super::{ContentSource, PostEntry};
use crate::error::PostError;

/// Finds every post in a content source and pairs its metadata with its slug
pub struct PostLocator<S> {
    source: Arc<S>,
    strip_prefix: String,
    strip_suffix: String,
}

impl<S: ContentSource> PostLocator<S> {
    /// Create a locator whose slugs drop `strip_prefix` and `strip_suffix`
    pub fn new(source: S, strip_prefix: &str, strip_suffix: &str) -> Self {
        Self {
            source: Arc::new(source),
            strip_prefix: strip_prefix.to_string(),
            strip_suffix: strip_suffix.to_string(),
        }
    }

    /// Discover all posts and resolve their metadata
    ///
    /// Every file is resolved on its own task and the batch is joined before
    /// returning. Entries come back in discovery order. The first failure
    /// cancels the remaining tasks and no entries are returned.
    pub async fn locate(&self) -> Result<Vec<PostEntry>, PostError> {
        let paths = self.source.discover()?;

        // Derive every slug up front so a bad path fails before any I/O
        let slugs = paths
            .iter()
            .map(|path| derive_slug(path, &self.strip_prefix, &self.strip_suffix))
            .collect::<Result<Vec<_>, _>>()?;

        let mut tasks = JoinSet::new();
        for (index, path) in paths.into_iter().enumerate() {
            let source = Arc::clone(&self.source);
            tasks.spawn(async move {
                let meta = source.resolve(&path).await;
                (index, path, meta)
            });
        }

        let mut resolved = vec![None; slugs.len()];
        while let Some(joined) = tasks.join_next().await {
            let (index, path, meta) = joined?;
            match meta {
                Ok(meta) => resolved[index] = Some(meta),
                Err(e) => {
                    tracing::error!("Failed to resolve post {}: {}", path, e);
                    // Dropping the set aborts the tasks still running
                    return Err(e);
                }
            }
        }

        let entries: Vec<PostEntry> = slugs
            .into_iter()
            .zip(resolved)
            .filter_map(|(slug, meta)| meta.map(|meta| PostEntry::new(meta, slug)))
            .collect();

        tracing::info!("Located {} posts", entries.len());
        Ok(entries)
    }
}

/// Derive a post's logical path by stripping a known prefix and suffix
///
/// Both must be present; a path outside the content root or with another
/// extension is rejected instead of being sliced into a wrong slug.
pub fn derive_slug(path: &str, prefix: &str, suffix: &str) -> Result<String, PostError> {
    let rest = path
        .strip_prefix(prefix)
        .ok_or_else(|| PostError::MissingPrefix {
            path: path.to_string(),
            prefix: prefix.to_string(),
        })?;

    let slug = rest
        .strip_suffix(suffix)
        .ok_or_else(|| PostError::MissingSuffix {
            path: path.to_string(),
            suffix: suffix.to_string(),
        })?;

    tracing::debug!("{} -> {}", path, slug);
    Ok(slug.to_string())
}
