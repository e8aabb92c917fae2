//! Clipboard domain types.
//!
//! [`ClipboardContents`] is what the clipboard capability reports, unprocessed.
//! [`ClipboardSnapshot`] is the classification the upload pipeline acts on.

mod path;

pub use path::resolve_clipboard_path;

use std::path::PathBuf;

/// Raw clipboard read result.
///
/// `file` may be a `file://` URI (possibly percent-encoded) or a plain path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardContents {
    pub file: Option<String>,
    pub text: Option<String>,
}

impl ClipboardContents {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_file(file: impl Into<String>) -> Self {
        Self {
            file: Some(file.into()),
            text: None,
        }
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            file: None,
            text: Some(text.into()),
        }
    }

    /// Text that is worth uploading: present and not blank.
    pub fn usable_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.trim().is_empty())
    }
}

/// Point-in-time classification of the clipboard.
///
/// Exactly one variant drives an upload run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardSnapshot {
    File(PathBuf),
    Text(String),
    Empty,
}

impl ClipboardSnapshot {
    /// Classify the clipboard once the file entry (if any) has been resolved
    /// and confirmed to exist.
    ///
    /// An existing file always wins over text; blank text counts as empty.
    pub fn classify(existing_file: Option<PathBuf>, contents: ClipboardContents) -> Self {
        if let Some(path) = existing_file {
            return Self::File(path);
        }
        match contents.usable_text() {
            Some(text) => Self::Text(text.to_owned()),
            None => Self::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}
