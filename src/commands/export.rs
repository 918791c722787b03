//! Export the post list as JSON

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::content::PostList;
use crate::Blog;

/// Payload handed to the listing page
#[derive(Serialize)]
struct Payload<'a> {
    posts: &'a PostList,
}

/// Write `{"posts": [...]}` to `output`, or stdout when no file is given
pub async fn run(blog: &Blog, output: Option<&Path>) -> Result<()> {
    let posts = blog.load_posts().await?;
    let json = render(&posts)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, json).with_context(|| format!("Failed to write {:?}", path))?;
            tracing::info!("Wrote {} posts to {:?}", posts.len(), path);
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Serialize the post list as pretty JSON
pub fn render(posts: &PostList) -> Result<String> {
    Ok(serde_json::to_string_pretty(&Payload { posts })?)
}
