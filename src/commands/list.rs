//! List posts

use anyhow::Result;

use crate::content::PostList;
use crate::helpers::dateify;
use crate::Blog;

/// Print posts newest first
pub async fn run(blog: &Blog) -> Result<()> {
    let posts = blog.load_posts().await?;
    print!("{}", render(&posts));
    Ok(())
}

/// Format the post list as text, one post per line
pub fn render(posts: &PostList) -> String {
    let mut out = format!("Posts ({}):\n", posts.len());
    for post in posts {
        out.push_str(&format!(
            "  {}  {}  [{}]\n",
            dateify(post.meta.date_key()),
            post.display_title(),
            post.path
        ));
    }
    out
}
