//! Write the HTML listing page

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::content::PostList;
use crate::helpers::{codify, html_escape, link_to, time_tag};
use crate::Blog;

/// Render the listing page to `output` (default `<public_dir>/index.html`)
pub async fn run(blog: &Blog, output: Option<&Path>) -> Result<()> {
    let posts = blog.load_posts().await?;
    let html = render(&blog.config, &posts);

    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output(blog));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, html).with_context(|| format!("Failed to write {:?}", path))?;

    tracing::info!("Wrote listing of {} posts to {:?}", posts.len(), path);
    Ok(())
}

fn default_output(blog: &Blog) -> PathBuf {
    blog.public_dir.join("index.html")
}

/// Render a minimal listing page
pub fn render(config: &SiteConfig, posts: &PostList) -> String {
    let title = html_escape(&config.title);
    let description = if config.description.is_empty() {
        String::new()
    } else {
        format!(
            "  <meta name=\"description\" content=\"{}\">\n",
            html_escape(&config.description)
        )
    };

    let mut items = String::new();
    for post in posts {
        let label = codify(&html_escape(post.display_title()));
        items.push_str(&format!(
            "    <li>{} {}</li>\n",
            time_tag(post.meta.date_key()),
            link_to(&post.path, &label)
        ));
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"utf-8\">\n  <title>{title}</title>\n{description}</head>\n<body>\n  <h1>{title}</h1>\n  <ul class=\"posts\">\n{items}  </ul>\n</body>\n</html>\n"
    )
}
