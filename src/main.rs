//! legalview - browse the document library of a LegalView document store.

mod cli;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // LEGALVIEW_STORE_URL may come from .env; clap reads it during parsing.
    let _ = dotenvy::dotenv();

    // RUST_LOG overrides; otherwise -v lifts the library's own events to info.
    let default_filter = if cli::is_verbose() {
        "legalview=info"
    } else {
        "legalview=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    cli::run().await
}
