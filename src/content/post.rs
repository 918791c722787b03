//! Post entry and post list models

use serde::{Deserialize, Serialize};
use std::ops::Deref;

use super::PostMetadata;

/// A discovered post: its front-matter and its logical path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostEntry {
    /// Front-matter fields
    pub meta: PostMetadata,

    /// Logical path (slug) with the content root and file suffix stripped
    pub path: String,
}

impl PostEntry {
    pub fn new(meta: PostMetadata, path: impl Into<String>) -> Self {
        Self {
            meta,
            path: path.into(),
        }
    }

    /// Title for display, falling back to the path
    pub fn display_title(&self) -> &str {
        self.meta.title().unwrap_or(&self.path)
    }
}

/// Posts ordered newest first
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PostList(Vec<PostEntry>);

impl PostList {
    /// Wrap entries that are already in newest-first order
    pub(crate) fn from_ordered(entries: Vec<PostEntry>) -> Self {
        Self(entries)
    }

    pub fn into_vec(self) -> Vec<PostEntry> {
        self.0
    }
}

impl Deref for PostList {
    type Target = [PostEntry];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for PostList {
    type Item = PostEntry;
    type IntoIter = std::vec::IntoIter<PostEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PostList {
    type Item = &'a PostEntry;
    type IntoIter = std::slice::Iter<'a, PostEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
