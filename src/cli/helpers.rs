//! Shared helper functions for CLI commands.

use std::sync::Arc;

use legalview::config::Settings;
use legalview::library::{DocumentLibrary, LibraryPorts};
use legalview::models::DocumentMetadata;
use legalview::store::HttpDocumentStore;

/// Build a library against the configured store.
pub fn open_library(settings: &Settings, ports: LibraryPorts) -> anyhow::Result<DocumentLibrary> {
    let store = HttpDocumentStore::new(
        &settings.store_url,
        settings.request_timeout(),
        &settings.user_agent,
    )?;
    Ok(DocumentLibrary::new(Arc::new(store), ports))
}

/// Load the listing and look up `name`, failing if the store could not be
/// reached or has no such document.
pub async fn load_document(
    library: &DocumentLibrary,
    name: &str,
) -> anyhow::Result<DocumentMetadata> {
    library.mount().await;

    let state = library.snapshot();
    if let Some(error) = state.error {
        anyhow::bail!(error);
    }

    library
        .find(name)
        .ok_or_else(|| anyhow::anyhow!("Document '{}' not found", name))
}

/// Truncate a string to a maximum number of characters, adding "..." if
/// truncated.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
