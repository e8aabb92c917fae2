use anyhow::{anyhow, Result};
use clipboard_rs::{Clipboard, ClipboardContext, ContentFormat};
use tf_core::ClipboardContents;

pub struct CommonClipboardImpl;

fn map_clipboard_err<T>(
    result: std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>,
) -> Result<T> {
    result.map_err(|e| anyhow!(e))
}

impl CommonClipboardImpl {
    /// Copied files first, then plain text. Formats that fail to read are
    /// treated as absent.
    pub fn read_contents(ctx: &ClipboardContext) -> ClipboardContents {
        let files = if ctx.has(ContentFormat::Files) {
            ctx.get_files().ok()
        } else {
            None
        };
        let text = if ctx.has(ContentFormat::Text) {
            ctx.get_text().ok()
        } else {
            None
        };
        contents_from(files, text)
    }

    pub fn write_text(ctx: &ClipboardContext, text: &str) -> Result<()> {
        map_clipboard_err(ctx.set_text(text.to_string()))
    }
}

/// Only the first copied file is uploaded.
pub(crate) fn contents_from(files: Option<Vec<String>>, text: Option<String>) -> ClipboardContents {
    let file = files.and_then(|files| files.into_iter().find(|f| !f.trim().is_empty()));
    ClipboardContents { file, text }
}
