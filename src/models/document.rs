//! Document metadata as reported by the document store.
//!
//! Metadata is owned by the store; the client only ever holds a cached copy
//! that is replaced on the next successful listing.

use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize};

/// Type string the store reports for PDF files.
pub const PDF_TYPE: &str = ".pdf";

const SIZE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Metadata for a single stored document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Storage identifier, unique within the store.
    pub name: String,
    /// Human-readable name (usually the file stem).
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_name: String,
    /// Size in bytes.
    #[serde(rename = "size", default, deserialize_with = "null_as_default")]
    pub size_bytes: u64,
    /// File extension including the leading dot, e.g. `.pdf`.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub doc_type: String,
    /// Upload time as a Unix timestamp in seconds.
    #[serde(
        rename = "uploaded",
        default,
        deserialize_with = "deserialize_timestamp"
    )]
    pub uploaded_at: i64,
    /// Storage-side location. Opaque to the client.
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
}

impl DocumentMetadata {
    /// Whether the store reports this document as a PDF.
    pub fn is_pdf(&self) -> bool {
        self.doc_type == PDF_TYPE
    }

    /// Case-insensitive substring match against display name or storage name.
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.display_name.to_lowercase().contains(&needle)
            || self.name.to_lowercase().contains(&needle)
    }

    /// Type label as shown in listings (`.PDF`).
    pub fn type_label(&self) -> String {
        self.doc_type.to_uppercase()
    }

    /// Human-readable size.
    pub fn size_label(&self) -> String {
        format_file_size(self.size_bytes)
    }

    /// Upload date in the local timezone.
    pub fn uploaded_label(&self) -> String {
        format_upload_date(self.uploaded_at)
    }
}

/// Response body of the store's listing endpoint.
///
/// A missing or null `documents` field is an empty listing, not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentListing {
    #[serde(default)]
    pub documents: Option<Vec<DocumentMetadata>>,
}

impl DocumentListing {
    pub fn into_documents(self) -> Vec<DocumentMetadata> {
        self.documents.unwrap_or_default()
    }
}

/// Format a byte count with a binary unit, e.g. `2048` -> `"2 KB"`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, SIZE_UNITS[unit])
}

/// Format a Unix timestamp as a local calendar date.
pub fn format_upload_date(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Accept integer or fractional timestamps; the store reports file mtimes
/// as floats.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Timestamp {
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<Timestamp>::deserialize(deserializer)? {
        Some(Timestamp::Int(secs)) => secs,
        Some(Timestamp::Float(secs)) => secs.trunc() as i64,
        None => 0,
    })
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str, display_name: &str) -> DocumentMetadata {
        DocumentMetadata {
            name: name.to_string(),
            display_name: display_name.to_string(),
            size_bytes: 0,
            doc_type: ".pdf".to_string(),
            uploaded_at: 0,
            path: String::new(),
        }
    }

    #[test]
    fn parses_store_listing() {
        let json = r#"{"documents": [{"name": "a.pdf", "display_name": "Contract A",
            "size": 2048, "type": ".pdf", "uploaded": 1700000000, "path": "/x"}]}"#;
        let docs = serde_json::from_str::<DocumentListing>(json)
            .unwrap()
            .into_documents();

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].display_name, "Contract A");
        assert_eq!(docs[0].size_label(), "2 KB");
        assert_eq!(docs[0].uploaded_at, 1_700_000_000);
        assert!(docs[0].is_pdf());
    }

    #[test]
    fn fractional_timestamp_is_truncated() {
        let json = r#"{"name": "b.txt", "uploaded": 1700000000.75}"#;
        let doc: DocumentMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(doc.uploaded_at, 1_700_000_000);
        assert_eq!(doc.display_name, "");
    }

    #[test]
    fn null_fields_do_not_reject_the_listing() {
        let json = r#"{"documents": [
            {"name": "a.pdf", "display_name": null, "size": null, "type": null,
             "uploaded": null, "path": null},
            {"name": "b.pdf", "display_name": "B", "size": 10, "type": ".pdf",
             "uploaded": 1700000000, "path": "/b"}]}"#;
        let docs = serde_json::from_str::<DocumentListing>(json)
            .unwrap()
            .into_documents();

        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].display_name, "");
        assert_eq!(docs[0].size_bytes, 0);
        assert_eq!(docs[0].uploaded_at, 0);
        assert_eq!(docs[0].path, "");
        assert_eq!(docs[1].display_name, "B");
    }

    #[test]
    fn missing_or_null_documents_is_empty() {
        let missing: DocumentListing = serde_json::from_str("{}").unwrap();
        assert!(missing.into_documents().is_empty());

        let null: DocumentListing = serde_json::from_str(r#"{"documents": null}"#).unwrap();
        assert!(null.into_documents().is_empty());
    }

    #[test]
    fn file_sizes() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5 MB");
        assert_eq!(format_file_size(1_234_567), "1.18 MB");
        assert_eq!(format_file_size(3 * 1024u64.pow(5)), "3072 TB");
    }

    #[test]
    fn match_is_case_insensitive_on_either_field() {
        let d = doc("nda-2024.pdf", "Mutual NDA");
        assert!(d.matches("nda"));
        assert!(d.matches("MUTUAL"));
        assert!(d.matches("2024"));
        assert!(d.matches(""));
        assert!(!d.matches("lease"));
    }

    #[test]
    fn labels() {
        let d = doc("a.pdf", "A");
        assert_eq!(d.type_label(), ".PDF");
        assert!(format_upload_date(1_700_000_000).starts_with("2023-11-1"));
    }
}
