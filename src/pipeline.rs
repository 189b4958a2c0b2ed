use std::io::Write;

use anyhow::Result;
use reqwest::Client;
use rusqlite::Connection;

use crate::config::Config;
use crate::db;
use crate::import::{self, ImportSummary};
use crate::report;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub posts: ImportSummary,
    pub comments: ImportSummary,
    pub reported: usize,
}

// init -> posts -> comments -> report, each stage committed before the next
pub async fn run<W: Write>(
    conn: &Connection,
    client: &Client,
    config: &Config,
    out: W,
) -> Result<RunSummary> {
    db::init(conn)?;
    let version = db::schema_version(conn)?;
    tracing::debug!(?version, "schema ready");

    let posts = import::import_posts(conn, client, &config.posts_url).await?;
    let comments = import::import_comments(conn, client, &config.comments_url).await?;

    let (post_rows, comment_rows) = (db::count_posts(conn)?, db::count_comments(conn)?);
    tracing::info!(post_rows, comment_rows, "store populated");

    let reported = report::write_report(conn, out)?;

    Ok(RunSummary {
        posts,
        comments,
        reported,
    })
}
