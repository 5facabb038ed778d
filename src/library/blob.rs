//! Handles to downloaded document content.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use bytes::Bytes;

/// Counts live [`DownloadedBlob`] handles.
#[derive(Debug, Clone, Default)]
pub struct BlobTracker {
    live: Arc<AtomicUsize>,
}

impl BlobTracker {
    pub fn hold(&self, name: &str, content: Bytes) -> DownloadedBlob {
        self.live.fetch_add(1, Ordering::SeqCst);
        DownloadedBlob {
            name: name.to_string(),
            content,
            live: Arc::clone(&self.live),
        }
    }

    /// Number of handles not yet released.
    pub fn outstanding(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}

/// Downloaded bytes awaiting hand-off to persistence.
///
/// Released when dropped.
#[derive(Debug)]
pub struct DownloadedBlob {
    name: String,
    content: Bytes,
    live: Arc<AtomicUsize>,
}

impl DownloadedBlob {
    pub fn as_bytes(&self) -> &[u8] {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl Drop for DownloadedBlob {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
        tracing::debug!("Released {} byte blob for {}", self.content.len(), self.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_releases_handle() {
        let tracker = BlobTracker::default();
        let blob = tracker.hold("a.pdf", Bytes::from_static(b"%PDF-1.7"));
        assert_eq!(tracker.outstanding(), 1);
        assert_eq!(blob.len(), 8);

        drop(blob);
        assert_eq!(tracker.outstanding(), 0);
    }
}
