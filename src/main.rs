//! CLI entry point for postlist

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "postlist")]
#[command(version)]
#[command(about = "Discovers markdown blog posts and lists them newest first", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts, newest first
    #[command(alias = "ls")]
    List,

    /// Write the post list as JSON
    Export {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write an HTML listing page
    Index {
        /// Output file (defaults to <public_dir>/index.html)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "postlist=debug,info"
    } else {
        "postlist=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List => {
            let blog = postlist::Blog::new(&base_dir)?;
            blog.list().await?;
        }

        Commands::Export { output } => {
            let blog = postlist::Blog::new(&base_dir)?;
            blog.export(output.as_deref()).await?;
        }

        Commands::Index { output } => {
            let blog = postlist::Blog::new(&base_dir)?;
            tracing::info!("Rendering listing page...");
            blog.index(output.as_deref()).await?;
        }

        Commands::Version => {
            println!("postlist version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
