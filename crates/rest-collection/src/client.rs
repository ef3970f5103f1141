//! Collection Client Trait
//!
//! Abstract interface over a remote collection.
//! `HttpCollection` talks to a real server; tests use in-memory fakes.

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::record::{Record, RecordId};

/// CRUD calls against one collection endpoint.
///
/// Futures are not `Send`: the browser fetch API is single-threaded.
#[async_trait(?Send)]
pub trait CollectionClient<T: Record> {
    /// `GET /{resource}`, in server order
    async fn list(&self) -> ApiResult<Vec<T>>;

    /// `POST /{resource}`, returns the record as stored
    async fn create(&self, record: &T) -> ApiResult<T>;

    /// `PUT /{resource}/{id}` with the full record, returns the record as stored
    async fn update(&self, record: &T) -> ApiResult<T>;

    /// `DELETE /{resource}/{id}`
    async fn delete(&self, id: &RecordId) -> ApiResult<()>;
}
