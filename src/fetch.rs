use reqwest::Client;
use serde_json::{Map, Value};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid url {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("request failed for {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("invalid json from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

// GET the url and decode the body as JSON. Status codes are not checked.
pub async fn try_fetch_json(client: &Client, url: &str) -> Result<Value, FetchError> {
    let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    let body = client
        .get(parsed)
        .send()
        .await
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?
        .bytes()
        .await
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

    serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
        url: url.to_string(),
        source,
    })
}

// Any failure is logged and reduced to an empty object
pub async fn fetch_json(client: &Client, url: &str) -> Value {
    match try_fetch_json(client, url).await {
        Ok(value) => value,
        Err(e) => {
            tracing::error!(error = %e, "fetch failed");
            Value::Object(Map::new())
        }
    }
}
