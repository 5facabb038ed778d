//! HTTP request handlers for the document store.

use std::path::PathBuf;
use std::time::UNIX_EPOCH;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use super::StoreState;
use crate::models::{DocumentListing, DocumentMetadata};

fn error_response(status: StatusCode, detail: impl Into<String>) -> Response {
    (status, Json(json!({ "detail": detail.into() }))).into_response()
}

/// Resolve a storage name to a file inside the documents directory.
async fn resolve(state: &StoreState, name: &str) -> Result<PathBuf, Response> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(error_response(StatusCode::FORBIDDEN, "Access denied"));
    }

    let file_path = state.documents_dir.join(name);
    match tokio::fs::canonicalize(&file_path).await {
        Ok(canonical) if !canonical.starts_with(&state.documents_dir) => {
            Err(error_response(StatusCode::FORBIDDEN, "Access denied"))
        }
        Ok(canonical) if canonical.is_file() => Ok(canonical),
        _ => Err(error_response(StatusCode::NOT_FOUND, "Document not found")),
    }
}

/// Build metadata for a stored file.
async fn describe(path: &std::path::Path) -> std::io::Result<DocumentMetadata> {
    let meta = tokio::fs::metadata(path).await?;
    let uploaded_at = meta
        .modified()?
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0);

    Ok(DocumentMetadata {
        name: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        display_name: path
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        size_bytes: meta.len(),
        doc_type: path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default(),
        uploaded_at,
        path: path.display().to_string(),
    })
}

/// List every file in the documents directory.
pub async fn list_documents(State(state): State<StoreState>) -> Response {
    let mut entries = match tokio::fs::read_dir(&state.documents_dir).await {
        Ok(entries) => entries,
        Err(e) => return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };

    let mut documents = Vec::new();
    loop {
        let entry = match entries.next_entry().await {
            Ok(Some(entry)) => entry,
            Ok(None) => break,
            Err(e) => return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };
        let path = entry.path();
        if !tokio::fs::metadata(&path).await.is_ok_and(|m| m.is_file()) {
            continue;
        }
        match describe(&path).await {
            Ok(doc) => documents.push(doc),
            Err(e) => tracing::warn!("Skipping {}: {}", path.display(), e),
        }
    }
    documents.sort_by(|a, b| a.name.cmp(&b.name));

    Json(DocumentListing {
        documents: Some(documents),
    })
    .into_response()
}

/// Metadata for a single document.
pub async fn document_info(
    State(state): State<StoreState>,
    Path(name): Path<String>,
) -> Response {
    let file_path = match resolve(&state, &name).await {
        Ok(p) => p,
        Err(response) => return response,
    };

    match describe(&file_path).await {
        Ok(doc) => Json(doc).into_response(),
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

/// Serve document content as an attachment.
pub async fn download_document(
    State(state): State<StoreState>,
    Path(name): Path<String>,
) -> Response {
    let file_path = match resolve(&state, &name).await {
        Ok(p) => p,
        Err(response) => return response,
    };

    let content = match tokio::fs::read(&file_path).await {
        Ok(c) => c,
        Err(e) => {
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error downloading document: {}", e),
            )
        }
    };

    let disposition = format!("attachment; filename=\"{}\"", name.replace('"', ""));
    (
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        content,
    )
        .into_response()
}

/// Remove a document from the store.
pub async fn delete_document(
    State(state): State<StoreState>,
    Path(name): Path<String>,
) -> Response {
    let file_path = match resolve(&state, &name).await {
        Ok(p) => p,
        Err(response) => return response,
    };

    if let Err(e) = tokio::fs::remove_file(&file_path).await {
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error deleting document: {}", e),
        );
    }

    tracing::info!("Deleted {}", file_path.display());
    Json(json!({ "message": format!("Document {} deleted successfully", name) })).into_response()
}
