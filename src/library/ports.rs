//! Capabilities the library needs from its host environment.

use std::fmt;

use async_trait::async_trait;

/// Opens URLs in a new browsing context.
///
/// Navigation is fire-and-forget: implementations report their own
/// failures and never feed them back into library state.
pub trait NavigationPort: Send + Sync {
    fn open_in_new_context(&self, url: &str);
}

/// Persists downloaded document content on the client side.
#[async_trait]
pub trait FilePersistencePort: Send + Sync {
    async fn save(&self, filename: &str, content: &[u8]) -> anyhow::Result<()>;
}

/// User-facing confirmation and notices.
#[async_trait]
pub trait InteractionPort: Send + Sync {
    /// Ask a yes/no question. `false` means the user declined.
    async fn confirm(&self, prompt: &str) -> bool;

    /// Show a notice the user has to acknowledge.
    fn notify(&self, notice: Notice);
}

/// Notices raised by library actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    DownloadFailed { name: String },
    Deleted { display_name: String },
    DeleteFailed { display_name: String },
}

impl Notice {
    pub fn is_failure(&self) -> bool {
        !matches!(self, Notice::Deleted { .. })
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::DownloadFailed { .. } => {
                write!(f, "Failed to download document. Please try again.")
            }
            Notice::Deleted { .. } => write!(f, "Document deleted successfully!"),
            Notice::DeleteFailed { .. } => {
                write!(f, "Failed to delete document. Please try again.")
            }
        }
    }
}

/// Confirmation prompt shown before deleting a document.
pub fn delete_prompt(display_name: &str) -> String {
    format!(
        "Are you sure you want to delete \"{}\"? This action cannot be undone.",
        display_name
    )
}
