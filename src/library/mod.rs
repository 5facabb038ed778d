//! Document library state machine.
//!
//! [`DocumentLibrary`] owns the cached listing of the document store and the
//! loading/error state around it, and sequences the side effects of viewing,
//! downloading and deleting documents:
//!
//! ```text
//! IDLE --fetch_all--> LOADING --ok--> IDLE (items replaced, error cleared)
//!                     LOADING --err-> IDLE (items kept, error set)
//! delete: confirm --yes--> DELETE --ok--> fetch_all + notice
//!                 --no---> nothing        --err-> notice
//! ```
//!
//! Overlapping fetches are not sequenced: whichever response arrives last
//! determines `items`, `loading` and `error`.

mod blob;
mod ports;
mod state;

pub use blob::{BlobTracker, DownloadedBlob};
pub use ports::{delete_prompt, FilePersistencePort, InteractionPort, NavigationPort, Notice};
pub use state::{filter_documents, LibraryState, LibraryView, FETCH_ERROR_MESSAGE};

use std::sync::Arc;

use tokio::sync::watch;

use crate::models::DocumentMetadata;
use crate::store::DocumentStore;

/// Result of a user-triggered action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Completed,
    Failed,
    /// The user declined the confirmation; nothing was sent.
    Declined,
}

/// Host capabilities used by the library.
#[derive(Clone)]
pub struct LibraryPorts {
    pub navigator: Arc<dyn NavigationPort>,
    pub persistence: Arc<dyn FilePersistencePort>,
    pub interaction: Arc<dyn InteractionPort>,
}

/// Client-side document library.
pub struct DocumentLibrary {
    store: Arc<dyn DocumentStore>,
    ports: LibraryPorts,
    state: watch::Sender<LibraryState>,
    blobs: BlobTracker,
}

impl DocumentLibrary {
    pub fn new(store: Arc<dyn DocumentStore>, ports: LibraryPorts) -> Self {
        let (state, _) = watch::channel(LibraryState::default());
        Self {
            store,
            ports,
            state,
            blobs: BlobTracker::default(),
        }
    }

    /// Initial load, performed once when the library is first shown.
    pub async fn mount(&self) {
        self.fetch_all().await;
    }

    /// Receive every state update.
    pub fn subscribe(&self) -> watch::Receiver<LibraryState> {
        self.state.subscribe()
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> LibraryState {
        self.state.borrow().clone()
    }

    /// Cached documents matching the current search term.
    pub fn filtered(&self) -> Vec<DocumentMetadata> {
        self.state
            .borrow()
            .filtered()
            .into_iter()
            .cloned()
            .collect()
    }

    /// Look up a cached document by storage name, then by display name.
    pub fn find(&self, name: &str) -> Option<DocumentMetadata> {
        let state = self.state.borrow();
        state
            .items
            .iter()
            .find(|doc| doc.name == name)
            .or_else(|| state.items.iter().find(|doc| doc.display_name == name))
            .cloned()
    }

    /// Number of downloaded blobs not yet released.
    pub fn outstanding_blobs(&self) -> usize {
        self.blobs.outstanding()
    }

    /// Reload the full listing from the store.
    ///
    /// Single attempt. On failure the previous items stay in place and
    /// `error` is set; `loading` is cleared on both paths.
    pub async fn fetch_all(&self) {
        self.state.send_modify(|state| {
            state.loading = true;
            state.error = None;
        });
        tracing::debug!("Fetching document listing");

        let result = self.store.list_documents().await;

        self.state.send_modify(|state| {
            match result {
                Ok(documents) => {
                    tracing::debug!("Fetched {} documents", documents.len());
                    state.items = documents;
                }
                Err(e) => {
                    tracing::warn!("Error fetching documents: {}", e);
                    state.error = Some(FETCH_ERROR_MESSAGE.to_string());
                }
            }
            state.loading = false;
        });
    }

    /// Set the search term. Never touches the network.
    pub fn search(&self, term: &str) {
        self.state.send_modify(|state| {
            state.search_term = term.to_string();
        });
    }

    /// Open a document in a new browsing context.
    ///
    /// PDFs go to the download endpoint, everything else to the raw content
    /// endpoint.
    pub fn view(&self, doc: &DocumentMetadata) {
        let url = if doc.is_pdf() {
            self.store.download_url(&doc.name)
        } else {
            self.store.content_url(&doc.name)
        };
        tracing::debug!("Viewing {} at {}", doc.name, url);
        self.ports.navigator.open_in_new_context(&url);
    }

    /// Download a document and hand its bytes to the persistence port,
    /// saved under the document's storage name.
    pub async fn download(&self, doc: &DocumentMetadata) -> ActionOutcome {
        let saved = match self.store.download_document(&doc.name).await {
            Ok(content) => {
                let blob = self.blobs.hold(&doc.name, content);
                let saved = self
                    .ports
                    .persistence
                    .save(&doc.name, blob.as_bytes())
                    .await;
                drop(blob);
                saved
            }
            Err(e) => Err(e.into()),
        };

        match saved {
            Ok(()) => {
                tracing::info!("Downloaded {}", doc.name);
                ActionOutcome::Completed
            }
            Err(e) => {
                tracing::warn!("Error downloading document {}: {}", doc.name, e);
                self.ports.interaction.notify(Notice::DownloadFailed {
                    name: doc.name.clone(),
                });
                ActionOutcome::Failed
            }
        }
    }

    /// Delete a document after confirmation, then resynchronise the listing.
    ///
    /// A failed delete leaves the cached items untouched until the next
    /// fetch.
    pub async fn delete(&self, doc: &DocumentMetadata) -> ActionOutcome {
        let prompt = delete_prompt(&doc.display_name);
        if !self.ports.interaction.confirm(&prompt).await {
            tracing::debug!("Delete of {} declined", doc.name);
            return ActionOutcome::Declined;
        }

        match self.store.delete_document(&doc.name).await {
            Ok(()) => {
                tracing::info!("Deleted {}", doc.name);
                self.fetch_all().await;
                self.ports.interaction.notify(Notice::Deleted {
                    display_name: doc.display_name.clone(),
                });
                ActionOutcome::Completed
            }
            Err(e) => {
                tracing::warn!("Error deleting document {}: {}", doc.name, e);
                self.ports.interaction.notify(Notice::DeleteFailed {
                    display_name: doc.display_name.clone(),
                });
                ActionOutcome::Failed
            }
        }
    }
}
