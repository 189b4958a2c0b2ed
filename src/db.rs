use anyhow::Result;
use rusqlite::{Connection, params};

use crate::model::{Comment, Post};

pub const SCHEMA_VERSION: i64 = 1;

// One row of the posts/comments left join
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedRow {
    pub post_id: i64,
    pub user_id: i64,
    pub title: String,
    pub post_body: String,
    pub comment_id: Option<i64>,
    pub comment_post_id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub comment_body: Option<String>,
}

pub fn open(path: &str) -> Result<Connection> {
    let conn = Connection::open(path)?;
    tracing::debug!(path, "opened store");
    Ok(conn)
}

// Initialize tables; safe to run against an existing store
pub fn init(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        -- bundled SQLite enforces foreign keys by default
        PRAGMA foreign_keys = OFF;

        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS posts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER,
            title TEXT,
            body TEXT
        );

        -- post_id is declarative only, comments may reference missing posts
        CREATE TABLE IF NOT EXISTS comments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            post_id INTEGER,
            name TEXT,
            email TEXT,
            body TEXT,
            FOREIGN KEY(post_id) REFERENCES posts (id)
        );

        CREATE INDEX IF NOT EXISTS idx_comments_post_id
            ON comments (post_id);
        ",
    )?;

    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version, applied_at)
         VALUES (?1, datetime('now'))",
        [SCHEMA_VERSION],
    )?;

    Ok(())
}

pub fn schema_version(conn: &Connection) -> Result<Option<i64>> {
    let version = conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| {
        row.get::<_, Option<i64>>(0)
    })?;

    Ok(version)
}

// Returns true if inserted, false if already existed
pub fn insert_post(conn: &Connection, post: &Post) -> Result<bool> {
    let affected = conn.execute(
        "INSERT OR IGNORE INTO posts (id, user_id, title, body) VALUES (?1, ?2, ?3, ?4)",
        params![post.id, post.user_id, post.title, post.body],
    )?;

    Ok(affected > 0)
}

// Returns true if inserted, false if already existed
pub fn insert_comment(conn: &Connection, comment: &Comment) -> Result<bool> {
    let affected = conn.execute(
        "
        INSERT OR IGNORE INTO comments (id, post_id, name, email, body)
        VALUES (?1, ?2, ?3, ?4, ?5)
        ",
        params![
            comment.id,
            comment.post_id,
            comment.name,
            comment.email,
            comment.body
        ],
    )?;

    Ok(affected > 0)
}

pub fn count_posts(conn: &Connection) -> Result<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM posts", [], |row| row.get(0))?)
}

pub fn count_comments(conn: &Connection) -> Result<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM comments", [], |row| row.get(0))?)
}

// Every post with its comments, posts without comments appear once
pub fn joined_rows(conn: &Connection) -> Result<Vec<JoinedRow>> {
    let mut stmt = conn.prepare(
        "
        SELECT posts.id, posts.user_id, posts.title, posts.body,
               comments.id, comments.post_id, comments.name, comments.email, comments.body
        FROM posts
        LEFT JOIN comments
            ON comments.post_id = posts.id
        ORDER BY posts.id, comments.id
        ",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(JoinedRow {
            post_id: row.get(0)?,
            user_id: row.get(1)?,
            title: row.get(2)?,
            post_body: row.get(3)?,
            comment_id: row.get(4)?,
            comment_post_id: row.get(5)?,
            name: row.get(6)?,
            email: row.get(7)?,
            comment_body: row.get(8)?,
        })
    })?;

    let mut results = Vec::new();
    for item in rows {
        results.push(item?);
    }

    Ok(results)
}
