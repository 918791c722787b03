//! Configuration module

mod site;

pub use site::PostsConfig;
pub use site::SiteConfig;
