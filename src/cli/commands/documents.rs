//! Document library commands.

use std::sync::Arc;

use console::style;

use legalview::adapters::{BrowserNavigator, DirectoryPersistence, TerminalInteraction};
use legalview::config::Settings;
use legalview::library::{ActionOutcome, LibraryPorts, LibraryView};

use crate::cli::helpers::{load_document, open_library, truncate};

fn terminal_ports(settings: &Settings, assume_yes: bool) -> LibraryPorts {
    LibraryPorts {
        navigator: Arc::new(BrowserNavigator),
        persistence: Arc::new(DirectoryPersistence::new(&settings.downloads_dir)),
        interaction: Arc::new(TerminalInteraction::new(assume_yes)),
    }
}

/// List documents, optionally filtered by a search term.
pub async fn cmd_list(settings: &Settings, search: Option<&str>, json: bool) -> anyhow::Result<()> {
    let library = open_library(settings, terminal_ports(settings, false))?;
    library.mount().await;
    if let Some(term) = search {
        library.search(term);
    }

    let state = library.snapshot();

    if json {
        if let Some(ref error) = state.error {
            anyhow::bail!(error.clone());
        }
        println!("{}", serde_json::to_string_pretty(&library.filtered())?);
        return Ok(());
    }

    println!(
        "\n{:<50} {}",
        style("Document Library").bold(),
        style(state.count_label()).dim()
    );
    println!("{}", "-".repeat(80));

    match state.view() {
        LibraryView::Error(message) => {
            println!("{} Error Loading Documents", style("✗").red());
            println!("  {}", message);
            println!(
                "  Run the command again to retry ({})",
                style(&settings.store_url).cyan()
            );
            anyhow::bail!("could not load documents from {}", settings.store_url);
        }
        LibraryView::Loading => println!("Loading documents..."),
        LibraryView::Empty { searching } => {
            println!("{} No documents found", style("!").yellow());
            println!("  {}", LibraryView::empty_hint(searching));
        }
        LibraryView::Documents(docs) => {
            println!(
                "{:<32} {:<24} {:<6} {:>10} {:<10}",
                "Name", "File", "Type", "Size", "Uploaded"
            );
            println!("{}", "-".repeat(80));
            for doc in docs {
                println!(
                    "{:<32} {:<24} {:<6} {:>10} {:<10}",
                    truncate(&doc.display_name, 31),
                    truncate(&doc.name, 23),
                    doc.type_label(),
                    doc.size_label(),
                    doc.uploaded_label()
                );
            }
        }
    }

    Ok(())
}

/// Open a document in the browser.
pub async fn cmd_view(settings: &Settings, name: &str) -> anyhow::Result<()> {
    let library = open_library(settings, terminal_ports(settings, false))?;
    let doc = load_document(&library, name).await?;
    library.view(&doc);
    Ok(())
}

/// Download a document into the downloads directory.
pub async fn cmd_download(settings: &Settings, name: &str) -> anyhow::Result<()> {
    let library = open_library(settings, terminal_ports(settings, false))?;
    let doc = load_document(&library, name).await?;

    match library.download(&doc).await {
        ActionOutcome::Completed => {
            println!(
                "{} Saved {} ({}) to {}",
                style("✓").green(),
                doc.name,
                doc.size_label(),
                settings.downloads_dir.display()
            );
            Ok(())
        }
        _ => anyhow::bail!("download of '{}' failed", doc.name),
    }
}

/// Delete a document after confirmation.
pub async fn cmd_delete(settings: &Settings, name: &str, yes: bool) -> anyhow::Result<()> {
    let library = open_library(settings, terminal_ports(settings, yes))?;
    let doc = load_document(&library, name).await?;

    println!(
        "\n{} Delete '{}' ({})",
        style("→").cyan(),
        style(&doc.display_name).yellow(),
        doc.name
    );

    match library.delete(&doc).await {
        ActionOutcome::Completed => {
            println!("  {}", library.snapshot().count_label());
            Ok(())
        }
        ActionOutcome::Declined => Ok(()),
        ActionOutcome::Failed => anyhow::bail!("delete of '{}' failed", doc.name),
    }
}
