//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod documents;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use legalview::config::{load_settings_with_options, LoadOptions};

#[derive(Parser)]
#[command(name = "legalview")]
#[command(about = "Browse, download and delete documents in a LegalView document store")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Document store URL (e.g., http://localhost:8001)
    #[arg(long, short = 's', global = true, env = "LEGALVIEW_STORE_URL")]
    store_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// List documents in the store
    List {
        /// Only show documents whose name contains this text
        #[arg(long, short = 'q')]
        search: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Open a document in the browser
    View {
        /// Storage name or display name of the document
        name: String,
    },

    /// Download a document
    Download {
        /// Storage name or display name of the document
        name: String,
        /// Directory to save into (defaults to the configured downloads directory)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Delete a document from the store
    Delete {
        /// Storage name or display name of the document
        name: String,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Serve a directory as a document store
    Serve {
        /// Address to bind: PORT, HOST, or HOST:PORT
        #[arg(long, short, default_value = "127.0.0.1:8001")]
        bind: String,
        /// Directory to serve (defaults to the configured documents directory)
        #[arg(long, short)]
        dir: Option<PathBuf>,
    },
}

/// Run the CLI.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = LoadOptions {
        config_path: cli.config,
        store_url: cli.store_url,
    };
    let (mut settings, _config) = load_settings_with_options(options).await;

    match cli.command {
        Commands::List { search, json } => {
            documents::cmd_list(&settings, search.as_deref(), json).await
        }
        Commands::View { name } => documents::cmd_view(&settings, &name).await,
        Commands::Download { name, output } => {
            if let Some(output) = output {
                settings.downloads_dir = output;
            }
            documents::cmd_download(&settings, &name).await
        }
        Commands::Delete { name, yes } => documents::cmd_delete(&settings, &name, yes).await,
        Commands::Serve { bind, dir } => {
            if let Some(dir) = dir {
                settings.documents_dir = dir;
            }
            serve::cmd_serve(&settings, &bind).await
        }
    }
}
