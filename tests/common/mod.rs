//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;

use legalview::library::{
    DocumentLibrary, FilePersistencePort, InteractionPort, LibraryPorts, NavigationPort, Notice,
};
use legalview::store::HttpDocumentStore;

/// Serve `app` on an ephemeral local port and return its base URL.
pub async fn spawn_store(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[derive(Default)]
pub struct Recorder {
    pub opened: Mutex<Vec<String>>,
    pub saved: Mutex<Vec<(String, Vec<u8>)>>,
    pub notices: Mutex<Vec<Notice>>,
    pub prompts: Mutex<Vec<String>>,
    pub confirm: bool,
}

impl NavigationPort for Recorder {
    fn open_in_new_context(&self, url: &str) {
        self.opened.lock().unwrap().push(url.to_string());
    }
}

#[async_trait]
impl FilePersistencePort for Recorder {
    async fn save(&self, filename: &str, content: &[u8]) -> anyhow::Result<()> {
        self.saved
            .lock()
            .unwrap()
            .push((filename.to_string(), content.to_vec()));
        Ok(())
    }
}

#[async_trait]
impl InteractionPort for Recorder {
    async fn confirm(&self, prompt: &str) -> bool {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.confirm
    }

    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

/// Library talking to `base_url` with every port recorded.
pub fn library(base_url: &str, confirm: bool) -> (DocumentLibrary, Arc<Recorder>) {
    let recorder = Arc::new(Recorder {
        confirm,
        ..Default::default()
    });
    let store = HttpDocumentStore::new(base_url, None, "legalview-tests").unwrap();
    let library = DocumentLibrary::new(
        Arc::new(store),
        LibraryPorts {
            navigator: recorder.clone(),
            persistence: recorder.clone(),
            interaction: recorder.clone(),
        },
    );
    (library, recorder)
}
