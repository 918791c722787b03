//! Error types for post discovery and ordering

use std::path::PathBuf;
use thiserror::Error;

/// Front-matter parsing errors
#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("front-matter block opened with --- is never closed")]
    Unterminated,

    #[error("front-matter is not a key/value mapping")]
    NotAMapping,

    #[error("invalid YAML")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors raised while locating and assembling posts
#[derive(Error, Debug)]
pub enum PostError {
    #[error("Invalid glob pattern {pattern:?}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Failed to walk content directory")]
    Walk(#[from] glob::GlobError),

    #[error("Failed to read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse front-matter in {path}")]
    FrontMatter {
        path: String,
        #[source]
        source: FrontMatterError,
    },

    #[error("Post file name is not valid UTF-8: {path:?}")]
    NonUtf8Path { path: PathBuf },

    #[error("Post path {path} does not start with {prefix:?}")]
    MissingPrefix { path: String, prefix: String },

    #[error("Post path {path} does not end with {suffix:?}")]
    MissingSuffix { path: String, suffix: String },

    #[error("Post {path} has an invalid date: {date:?}")]
    InvalidDate { path: String, date: String },

    #[error("Metadata task failed")]
    Task(#[from] tokio::task::JoinError),
}
