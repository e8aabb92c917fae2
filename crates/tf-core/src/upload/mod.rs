//! Upload domain: what gets sent, how it is named, and what comes back.

mod error;
pub mod naming;
mod outcome;
mod response;

pub use error::UploadError;
pub use naming::{
    is_clipboard_placeholder, sanitize_file_name, sniff_image_kind, snippet_file_name,
    upload_file_name, ImageKind,
};
pub use outcome::{QrPayload, UploadOutcome, UploadReceipt, UploadStage};
pub use response::{interpret_response, TmpfileResponse, UploadResponse};

use bytes::Bytes;

/// Largest payload accepted for upload: 100 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 100 * 1024 * 1024;

/// Where an upload came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    File,
    Snippet,
}

/// Validated, named payload ready for the transport.
///
/// Lives for a single pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedUpload {
    pub name: String,
    pub bytes: Bytes,
    /// `None` lets the transport decide (raw bytes, named file part).
    pub content_type: Option<String>,
    pub kind: UploadKind,
}

impl SanitizedUpload {
    /// A file read from disk. `name` must already be sanitized.
    pub fn file(name: String, bytes: impl Into<Bytes>) -> Self {
        Self {
            name,
            bytes: bytes.into(),
            content_type: None,
            kind: UploadKind::File,
        }
    }

    /// A text snippet taken from the clipboard, named after `unix_ms`.
    pub fn snippet(text: String, unix_ms: i64) -> Self {
        Self {
            name: snippet_file_name(unix_ms),
            bytes: Bytes::from(text.into_bytes()),
            content_type: Some("text/plain".to_string()),
            kind: UploadKind::Snippet,
        }
    }

    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }
}
