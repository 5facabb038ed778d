//! Data models for LegalView.

mod document;

pub use document::{
    format_file_size, format_upload_date, DocumentListing, DocumentMetadata, PDF_TYPE,
};
