use anyhow::Result;
use reqwest::Client;
use rusqlite::Connection;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::db;
use crate::fetch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    Inserted,
    SkippedDuplicate,
    SkippedInvalid,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub inserted: usize,
    pub duplicates: usize,
    pub invalid: usize,
}

impl ImportSummary {
    fn record(&mut self, outcome: RecordOutcome) {
        match outcome {
            RecordOutcome::Inserted => self.inserted += 1,
            RecordOutcome::SkippedDuplicate => self.duplicates += 1,
            RecordOutcome::SkippedInvalid => self.invalid += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.inserted + self.duplicates + self.invalid
    }
}

pub async fn import_posts(conn: &Connection, client: &Client, url: &str) -> Result<ImportSummary> {
    tracing::info!(url, "importing posts");
    let payload = fetch::fetch_json(client, url).await;
    let summary = store_records(conn, "post", payload, db::insert_post)?;
    tracing::info!(?summary, total = summary.total(), "posts imported");
    Ok(summary)
}

pub async fn import_comments(
    conn: &Connection,
    client: &Client,
    url: &str,
) -> Result<ImportSummary> {
    tracing::info!(url, "importing comments");
    let payload = fetch::fetch_json(client, url).await;
    let summary = store_records(conn, "comment", payload, db::insert_comment)?;
    tracing::info!(?summary, total = summary.total(), "comments imported");
    Ok(summary)
}

// Insert every record of the payload in one transaction, committed after the loop
pub fn store_records<T, F>(
    conn: &Connection,
    kind: &str,
    payload: Value,
    insert: F,
) -> Result<ImportSummary>
where
    T: DeserializeOwned,
    F: Fn(&Connection, &T) -> Result<bool>,
{
    let records = match payload {
        Value::Array(items) => items,
        Value::Object(map) if map.is_empty() => Vec::new(),
        other => {
            tracing::warn!(
                kind,
                payload_type = json_type(&other),
                "payload is not a list, nothing to import"
            );
            Vec::new()
        }
    };

    let tx = conn.unchecked_transaction()?;
    let mut summary = ImportSummary::default();

    for record in records {
        let outcome = store_record(&tx, kind, record, &insert)?;
        summary.record(outcome);
    }

    tx.commit()?;

    Ok(summary)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn store_record<T, F>(
    conn: &Connection,
    kind: &str,
    record: Value,
    insert: &F,
) -> Result<RecordOutcome>
where
    T: DeserializeOwned,
    F: Fn(&Connection, &T) -> Result<bool>,
{
    let parsed = match T::deserialize(&record) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::error!(kind, error = %e, "invalid record skipped");
            return Ok(RecordOutcome::SkippedInvalid);
        }
    };

    if insert(conn, &parsed)? {
        Ok(RecordOutcome::Inserted)
    } else {
        tracing::warn!(kind, %record, "record already exists");
        Ok(RecordOutcome::SkippedDuplicate)
    }
}
