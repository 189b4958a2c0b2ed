mod config;
mod db;
mod fetch;
mod import;
mod model;
mod pipeline;
mod report;

use anyhow::Result;
use clap::Parser;
use reqwest::Client;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Import posts and comments into a local SQLite store and print them joined
#[derive(Debug, Parser)]
#[command(name = "post_sync")]
struct Cli {
    /// url for posts
    #[arg(long)]
    posts: Option<String>,
    /// url for comments
    #[arg(long)]
    comments: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr, stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::with_overrides(cli.posts, cli.comments);

    let conn = db::open(&config.db_path)?;
    let client = Client::new();

    let summary = pipeline::run(&conn, &client, &config, std::io::stdout()).await?;
    tracing::info!(?summary, "finished");

    conn.close().map_err(|(_, e)| e)?;

    Ok(())
}
