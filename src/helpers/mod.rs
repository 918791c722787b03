//! Helper functions for listing pages
//!
//! Small, stateless string transforms applied to post titles and dates
//! when the post list is rendered.

mod html;
mod text;

pub use html::*;
pub use text::*;
