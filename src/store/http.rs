//! HTTP client for the document store.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, Response};

use super::{DocumentStore, StoreError};
use crate::models::{DocumentListing, DocumentMetadata};

/// Document store reached over HTTP.
#[derive(Clone)]
pub struct HttpDocumentStore {
    client: Client,
    base_url: String,
}

impl HttpDocumentStore {
    /// Create a client for the store at `base_url`.
    ///
    /// No timeout is applied unless `timeout` is set; the transport's own
    /// limits govern failure latency otherwise.
    pub fn new(
        base_url: &str,
        timeout: Option<Duration>,
        user_agent: &str,
    ) -> Result<Self, StoreError> {
        let base_url = base_url.trim_end_matches('/');
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(StoreError::Config(format!(
                "store URL must be http(s): {}",
                base_url
            )));
        }

        let mut builder = Client::builder()
            .user_agent(user_agent)
            .gzip(true)
            .brotli(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn documents_url(&self) -> String {
        format!("{}/documents", self.base_url)
    }

    fn document_url(&self, name: &str) -> String {
        format!("{}/documents/{}", self.base_url, urlencoding::encode(name))
    }

    fn check(response: Response) -> Result<Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(StoreError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            })
        }
    }
}

#[async_trait]
impl DocumentStore for HttpDocumentStore {
    async fn list_documents(&self) -> Result<Vec<DocumentMetadata>, StoreError> {
        let url = self.documents_url();
        tracing::debug!("GET {}", url);

        let response = Self::check(self.client.get(&url).send().await?)?;
        let body = response.bytes().await?;
        let listing: DocumentListing = serde_json::from_slice(&body)?;
        Ok(listing.into_documents())
    }

    async fn download_document(&self, name: &str) -> Result<Bytes, StoreError> {
        let url = self.download_url(name);
        tracing::debug!("GET {}", url);

        let response = Self::check(self.client.get(&url).send().await?)?;
        Ok(response.bytes().await?)
    }

    async fn delete_document(&self, name: &str) -> Result<(), StoreError> {
        let url = self.document_url(name);
        tracing::debug!("DELETE {}", url);

        Self::check(self.client.delete(&url).send().await?)?;
        Ok(())
    }

    fn content_url(&self, name: &str) -> String {
        self.document_url(name)
    }

    fn download_url(&self, name: &str) -> String {
        format!("{}/download", self.document_url(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_urls() {
        let store = HttpDocumentStore::new("http://localhost:8001/", None, "test").unwrap();

        assert_eq!(store.base_url(), "http://localhost:8001");
        assert_eq!(
            store.content_url("lease.txt"),
            "http://localhost:8001/documents/lease.txt"
        );
        assert_eq!(
            store.download_url("a.pdf"),
            "http://localhost:8001/documents/a.pdf/download"
        );
    }

    #[test]
    fn names_are_encoded_as_one_segment() {
        let store = HttpDocumentStore::new("http://localhost:8001", None, "test").unwrap();
        assert_eq!(
            store.content_url("q3 report/v2.pdf"),
            "http://localhost:8001/documents/q3%20report%2Fv2.pdf"
        );
    }

    #[test]
    fn rejects_non_http_origin() {
        assert!(matches!(
            HttpDocumentStore::new("ftp://example.com", None, "test"),
            Err(StoreError::Config(_))
        ));
    }
}
