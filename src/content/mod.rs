//! Content module - post discovery, front-matter and ordering

pub mod assembler;
mod frontmatter;
pub mod locator;
mod post;
pub mod source;

pub use assembler::{assemble, assemble_checked, compare_dates};
pub use frontmatter::PostMetadata;
pub use locator::{derive_slug, PostLocator};
pub use post::{PostEntry, PostList};
pub use source::{ContentSource, FsContentSource};
