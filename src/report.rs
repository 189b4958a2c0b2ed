use std::fmt;
use std::io::Write;

use anyhow::Result;
use rusqlite::Connection;

use crate::db::{self, JoinedRow};

struct Nullable<'a, T>(&'a Option<T>);

impl<T: fmt::Debug> fmt::Display for Nullable<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value:?}"),
            None => f.write_str("None"),
        }
    }
}

impl fmt::Display for JoinedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {:?}, {:?}, {}, {}, {}, {}, {})",
            self.post_id,
            self.user_id,
            self.title,
            self.post_body,
            Nullable(&self.comment_id),
            Nullable(&self.comment_post_id),
            Nullable(&self.name),
            Nullable(&self.email),
            Nullable(&self.comment_body),
        )
    }
}

// Entry point; returns the number of rows written
pub fn write_report<W: Write>(conn: &Connection, mut out: W) -> Result<usize> {
    let rows = db::joined_rows(conn)?;

    for row in &rows {
        writeln!(out, "{row}")?;
    }
    out.flush()?;

    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Comment, Post};

    #[test]
    fn rows_render_as_tuples() {
        let conn = Connection::open_in_memory().unwrap();
        db::init(&conn).unwrap();
        for id in [1, 2] {
            db::insert_post(
                &conn,
                &Post {
                    id,
                    user_id: 5,
                    title: "T".into(),
                    body: "B".into(),
                },
            )
            .unwrap();
        }
        db::insert_comment(
            &conn,
            &Comment {
                id: 10,
                post_id: 1,
                name: "N".into(),
                email: "e@x.com".into(),
                body: "C".into(),
            },
        )
        .unwrap();

        let mut out = Vec::new();
        let count = write_report(&conn, &mut out).unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "(1, 5, \"T\", \"B\", 10, 1, \"N\", \"e@x.com\", \"C\")\n\
             (2, 5, \"T\", \"B\", None, None, None, None, None)\n"
        );
    }

    #[test]
    fn empty_store_writes_nothing() {
        let conn = Connection::open_in_memory().unwrap();
        db::init(&conn).unwrap();

        let mut out = Vec::new();

        assert_eq!(write_report(&conn, &mut out).unwrap(), 0);
        assert!(out.is_empty());
    }
}
