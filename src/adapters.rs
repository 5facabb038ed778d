//! Terminal implementations of the library ports.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use console::style;

use crate::library::{FilePersistencePort, InteractionPort, NavigationPort, Notice};

/// Opens URLs with the system's default browser.
#[derive(Debug, Default)]
pub struct BrowserNavigator;

impl NavigationPort for BrowserNavigator {
    fn open_in_new_context(&self, url: &str) {
        println!("{} Opening {}", style("→").cyan(), url);
        if let Err(e) = open::that(url) {
            tracing::warn!("Could not open browser for {}: {}", url, e);
            println!("  Open the URL above manually");
        }
    }
}

/// Saves downloads into a directory.
#[derive(Debug, Clone)]
pub struct DirectoryPersistence {
    dir: PathBuf,
}

impl DirectoryPersistence {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Target path for `filename`. Only the final path component is kept.
    pub fn target_path(&self, filename: &str) -> Option<PathBuf> {
        Path::new(filename)
            .file_name()
            .map(|name| self.dir.join(name))
    }
}

#[async_trait]
impl FilePersistencePort for DirectoryPersistence {
    async fn save(&self, filename: &str, content: &[u8]) -> anyhow::Result<()> {
        let path = self
            .target_path(filename)
            .ok_or_else(|| anyhow::anyhow!("Invalid filename: {}", filename))?;

        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(&path, content).await?;
        tracing::debug!("Saved {} bytes to {}", content.len(), path.display());
        Ok(())
    }
}

/// `[y/N]` prompts and styled notices on the terminal.
#[derive(Debug, Default)]
pub struct TerminalInteraction {
    /// Answer yes to every confirmation without prompting.
    assume_yes: bool,
}

impl TerminalInteraction {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

#[async_trait]
impl InteractionPort for TerminalInteraction {
    async fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        let prompt = prompt.to_string();
        let answer = tokio::task::spawn_blocking(move || -> io::Result<String> {
            print!("\n{} [y/N] ", prompt);
            io::stdout().flush()?;
            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            Ok(input)
        })
        .await;

        let accepted = match answer {
            Ok(Ok(input)) => is_yes(&input),
            Ok(Err(e)) => {
                tracing::warn!("Could not read confirmation: {}", e);
                false
            }
            Err(e) => {
                tracing::warn!("Confirmation prompt aborted: {}", e);
                false
            }
        };
        if !accepted {
            println!("{} Cancelled", style("!").yellow());
        }
        accepted
    }

    fn notify(&self, notice: Notice) {
        if notice.is_failure() {
            eprintln!("{} {}", style("✗").red(), notice);
        } else {
            println!("{} {}", style("✓").green(), notice);
        }
    }
}

fn is_yes(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}
