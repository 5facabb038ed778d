//! Top-level workspace: the active tab and the documents the session knows
//! about.
//!
//! The upload flow reports new documents here; the chat flow reads
//! [`Workspace::known_documents`] to scope its questions.

/// Tabs of the workspace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Upload,
    Chat,
    Documents,
}

impl Tab {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Chat => "chat",
            Self::Documents => "documents",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Workspace {
    active_tab: Tab,
    known_documents: Vec<String>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        tracing::debug!("Switching to {} tab", tab.as_str());
        self.active_tab = tab;
    }

    /// Record a completed upload and switch over to the chat.
    pub fn on_document_uploaded(&mut self, name: &str) {
        tracing::debug!("Upload completed: {}", name);
        self.known_documents.push(name.to_string());
        self.select_tab(Tab::Chat);
    }

    /// Document identifiers known to this session, in upload order.
    pub fn known_documents(&self) -> &[String] {
        &self.known_documents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_upload_tab() {
        let ws = Workspace::new();
        assert_eq!(ws.active_tab(), Tab::Upload);
        assert!(ws.known_documents().is_empty());
    }

    #[test]
    fn upload_appends_and_switches_to_chat() {
        let mut ws = Workspace::new();
        ws.on_document_uploaded("lease.pdf");
        assert_eq!(ws.active_tab(), Tab::Chat);

        ws.select_tab(Tab::Documents);
        ws.on_document_uploaded("nda.docx");

        assert_eq!(ws.active_tab(), Tab::Chat);
        assert_eq!(ws.known_documents(), ["lease.pdf", "nda.docx"]);
    }

    #[test]
    fn tab_names() {
        assert_eq!(Tab::Documents.as_str(), "documents");
    }
}
