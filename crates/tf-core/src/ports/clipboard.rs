//! Clipboard port - abstracts system clipboard access

use crate::clipboard::ClipboardContents;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ClipboardPort: Send + Sync {
    /// Read the current clipboard: first file reference and/or text.
    async fn read(&self) -> Result<ClipboardContents>;

    /// Replace the clipboard with `text`.
    async fn write_text(&self, text: &str) -> Result<()>;
}
