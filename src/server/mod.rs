//! Directory-backed document store.
//!
//! Serves every regular file in a directory under the store's HTTP contract:
//! - `GET /documents` lists metadata for all files
//! - `GET /documents/{name}` returns metadata for one file
//! - `GET /documents/{name}/download` returns its content
//! - `DELETE /documents/{name}` removes it

mod handlers;
mod routes;

pub use routes::create_router;

use std::path::{Path, PathBuf};

use tokio::net::TcpListener;

use crate::config::Settings;

/// Shared state for the store server.
#[derive(Clone)]
pub struct StoreState {
    /// Canonical path of the served directory.
    pub documents_dir: PathBuf,
}

impl StoreState {
    /// Serve `documents_dir`, creating it if needed.
    pub fn new(documents_dir: &Path) -> anyhow::Result<Self> {
        std::fs::create_dir_all(documents_dir)?;
        Ok(Self {
            documents_dir: documents_dir.canonicalize()?,
        })
    }
}

/// Bind the store's listener. `host` may be a name or an IP address.
pub async fn listen(host: &str, port: u16) -> std::io::Result<TcpListener> {
    TcpListener::bind((host, port)).await
}

/// Start the document store server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = StoreState::new(&settings.documents_dir)?;
    let app = create_router(state);

    let listener = listen(host, port).await?;
    tracing::info!("Starting document store at http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
