//! REST Collection Client
//!
//! Generic JSON client for collection endpoints of the form
//! `/{resource}` and `/{resource}/{id}`:
//! - record: the `Record` contract and wire-tolerant `RecordId`
//! - client: the `CollectionClient` abstraction
//! - http: `HttpCollection`, the reqwest-backed implementation

mod client;
mod error;
mod http;
mod record;

pub use client::CollectionClient;
pub use error::{ApiError, ApiResult};
pub use http::{normalize_base_url, HttpCollection};
pub use record::{Record, RecordId};
