//! Multipart submission payload.

use std::fs;
use std::path::Path;

use crate::error::FormError;

/// Advisory accept filter for the file picker. Nothing enforces it.
pub const ACCEPT_FILTER: &str = "image/*, .pdf, .doc, .docx";

/// Multipart part name carrying the JSON text.
pub const DATA_PART: &str = "data";
/// Multipart part name carrying the attachment.
pub const FILE_PART: &str = "file";

/// An attachment read from disk (or built in memory).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub name: String,
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let mime = detect_mime(&name, &bytes).map(str::to_string);
        Self { name, mime, bytes }
    }

    /// Read a file, naming the attachment after the file name.
    pub fn from_path(path: &Path) -> Result<Self, FormError> {
        let bytes = fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self::new(name, bytes))
    }
}

/// A prepared submission: the re-serialized JSON and the optional file.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission<F = Attachment> {
    /// Compact JSON text sent under the `data` part.
    pub data: String,
    /// Attachment sent under the `file` part, if one was chosen.
    pub file: Option<F>,
}

impl<F> Submission<F> {
    /// Parse the raw input and re-serialize it. Fails on malformed JSON.
    pub fn prepare(json_input: &str, file: Option<F>) -> Result<Self, FormError> {
        let parsed: serde_json::Value = serde_json::from_str(json_input)?;
        let data = serde_json::to_string(&parsed)?;
        Ok(Self { data, file })
    }
}

/// Whether a file matches [`ACCEPT_FILTER`].
///
/// Images are matched by content type, documents by content type or extension.
pub fn accepts(name: &str, mime: Option<&str>) -> bool {
    if let Some(mime) = mime
        && (mime.starts_with("image/") || DOCUMENT_MIMES.contains(&mime))
    {
        return true;
    }
    matches!(extension(name).as_deref(), Some("pdf" | "doc" | "docx"))
}

const DOCUMENT_MIMES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

fn extension(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
}

/// Detect the content type from magic bytes, falling back to the extension
/// for SVG, which is text and has no signature.
fn detect_mime(name: &str, bytes: &[u8]) -> Option<&'static str> {
    if let Some(kind) = infer::get(bytes) {
        return Some(kind.mime_type());
    }
    match extension(name).as_deref() {
        Some("svg") => Some("image/svg+xml"),
        _ => None,
    }
}
