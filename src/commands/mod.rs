//! CLI commands

pub mod export;
pub mod index;
pub mod list;
