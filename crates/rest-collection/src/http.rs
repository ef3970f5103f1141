//! HTTP Collection
//!
//! `CollectionClient` over a JSON REST endpoint using reqwest
//! (browser fetch on wasm32, hyper elsewhere).

use std::marker::PhantomData;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;

use crate::client::CollectionClient;
use crate::error::{ApiError, ApiResult};
use crate::record::{Record, RecordId};

/// Characters escaped when an id is placed in a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Check a server address and strip its trailing slash.
///
/// Only absolute `http`/`https` URLs with a host are accepted.
pub fn normalize_base_url(raw: &str) -> ApiResult<String> {
    let trimmed = raw.trim();
    let invalid = |reason: &str| ApiError::BaseUrl {
        url: trimmed.to_string(),
        reason: reason.to_string(),
    };
    let url = reqwest::Url::parse(trimmed).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid("missing host"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed"));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

/// Client for the collection `{base_url}/{T::RESOURCE}`
pub struct HttpCollection<T> {
    client: reqwest::Client,
    base_url: String,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for HttpCollection<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            _record: PhantomData,
        }
    }
}

impl<T: Record> HttpCollection<T> {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
            _record: PhantomData,
        }
    }

    /// `{base}/{resource}`
    pub fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, T::RESOURCE)
    }

    /// `{base}/{resource}/{id}`, id percent-encoded
    pub fn record_url(&self, id: &RecordId) -> String {
        format!(
            "{}/{}",
            self.collection_url(),
            utf8_percent_encode(id.as_str(), PATH_SEGMENT)
        )
    }
}

/// Reject non-2xx answers
fn check_status(response: reqwest::Response) -> ApiResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
            url: response.url().to_string(),
        })
    }
}

async fn read_json<R: DeserializeOwned>(response: reqwest::Response) -> ApiResult<R> {
    let body = check_status(response)?.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// Decode the echoed record; some backends answer writes with an empty body
async fn read_echo<T: Record>(response: reqwest::Response, sent: &T) -> ApiResult<T> {
    let body = check_status(response)?.text().await?;
    if body.trim().is_empty() {
        return Ok(sent.clone());
    }
    Ok(serde_json::from_str(&body)?)
}

#[async_trait(?Send)]
impl<T: Record> CollectionClient<T> for HttpCollection<T> {
    async fn list(&self) -> ApiResult<Vec<T>> {
        let response = self.client.get(self.collection_url()).send().await?;
        read_json(response).await
    }

    async fn create(&self, record: &T) -> ApiResult<T> {
        let response = self
            .client
            .post(self.collection_url())
            .json(record)
            .send()
            .await?;
        read_echo(response, record).await
    }

    async fn update(&self, record: &T) -> ApiResult<T> {
        let response = self
            .client
            .put(self.record_url(record.id()))
            .json(record)
            .send()
            .await?;
        read_echo(response, record).await
    }

    async fn delete(&self, id: &RecordId) -> ApiResult<()> {
        let response = self.client.delete(self.record_url(id)).send().await?;
        check_status(response)?;
        Ok(())
    }
}
