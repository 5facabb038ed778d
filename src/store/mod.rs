//! Access to the remote document store.
//!
//! The library talks to the store only through [`DocumentStore`], so the
//! state machine can be driven by an in-memory store in tests and by
//! [`HttpDocumentStore`] everywhere else.

mod http;

pub use http::HttpDocumentStore;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

use crate::models::DocumentMetadata;

/// Default origin of the document store.
pub const DEFAULT_STORE_URL: &str = "http://localhost:8001";

/// Errors returned by document store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Store returned {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Malformed store response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid store configuration: {0}")]
    Config(String),
}

/// Operations offered by the document store.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// List every document, in store order.
    async fn list_documents(&self) -> Result<Vec<DocumentMetadata>, StoreError>;

    /// Fetch the binary content of a document.
    async fn download_document(&self, name: &str) -> Result<Bytes, StoreError>;

    /// Delete a document.
    async fn delete_document(&self, name: &str) -> Result<(), StoreError>;

    /// URL of the raw content endpoint, for direct browser rendering.
    fn content_url(&self, name: &str) -> String;

    /// URL of the download endpoint.
    fn download_url(&self, name: &str) -> String;
}
