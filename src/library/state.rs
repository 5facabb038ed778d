//! Client-side view state and the views derived from it.

use crate::models::DocumentMetadata;

/// Message shown when a listing request fails.
pub const FETCH_ERROR_MESSAGE: &str =
    "Failed to load documents. Please check if the backend is running.";

/// Cached view of the document store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryState {
    /// Documents in store order, replaced wholesale on each successful fetch.
    pub items: Vec<DocumentMetadata>,
    /// Current filter, set only through `search`.
    pub search_term: String,
    /// True while a listing request is in flight.
    pub loading: bool,
    /// Set when the most recent listing request failed.
    pub error: Option<String>,
}

/// What the library panel shows for a given state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryView<'a> {
    Error(&'a str),
    Loading,
    Empty { searching: bool },
    Documents(Vec<&'a DocumentMetadata>),
}

impl LibraryView<'_> {
    /// Hint for the empty panel.
    pub fn empty_hint(searching: bool) -> &'static str {
        if searching {
            "Try adjusting your search terms"
        } else {
            "Upload your first document to get started"
        }
    }
}

impl LibraryState {
    /// Items matching the current search term.
    pub fn filtered(&self) -> Vec<&DocumentMetadata> {
        filter_documents(&self.items, &self.search_term)
    }

    /// Counter shown next to the refresh control.
    pub fn count_label(&self) -> String {
        if self.loading {
            "Loading...".to_string()
        } else {
            format!("{} documents", self.filtered().len())
        }
    }

    /// Panel contents. An error takes precedence over loading, which takes
    /// precedence over the document grid.
    pub fn view(&self) -> LibraryView<'_> {
        if let Some(ref error) = self.error {
            return LibraryView::Error(error);
        }
        if self.loading {
            return LibraryView::Loading;
        }

        let filtered = self.filtered();
        if filtered.is_empty() {
            LibraryView::Empty {
                searching: !self.search_term.is_empty(),
            }
        } else {
            LibraryView::Documents(filtered)
        }
    }
}

/// Documents whose display name or storage name contains `term`,
/// case-insensitively. Order is preserved.
pub fn filter_documents<'a>(
    items: &'a [DocumentMetadata],
    term: &str,
) -> Vec<&'a DocumentMetadata> {
    items.iter().filter(|doc| doc.matches(term)).collect()
}
