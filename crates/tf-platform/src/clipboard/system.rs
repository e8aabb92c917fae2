use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use clipboard_rs::ClipboardContext;
use tf_core::ports::ClipboardPort;
use tf_core::ClipboardContents;
use tokio::task::spawn_blocking;
use tracing::debug;

use super::common::CommonClipboardImpl;

/// The desktop clipboard through clipboard-rs.
///
/// Native clipboard calls block, so they run on the blocking pool.
pub struct SystemClipboard {
    inner: Arc<Mutex<ClipboardContext>>,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let context =
            ClipboardContext::new().map_err(|e| anyhow!("Failed to open system clipboard: {e}"))?;
        Ok(Self {
            inner: Arc::new(Mutex::new(context)),
        })
    }
}

#[async_trait]
impl ClipboardPort for SystemClipboard {
    async fn read(&self) -> Result<ClipboardContents> {
        let inner = Arc::clone(&self.inner);
        let contents = spawn_blocking(move || -> Result<ClipboardContents> {
            let ctx = inner
                .lock()
                .map_err(|_| anyhow!("clipboard context lock poisoned"))?;
            Ok(CommonClipboardImpl::read_contents(&ctx))
        })
        .await
        .context("Clipboard read task failed")??;

        debug!(
            has_file = contents.file.is_some(),
            has_text = contents.text.is_some(),
            "Clipboard read"
        );
        Ok(contents)
    }

    async fn write_text(&self, text: &str) -> Result<()> {
        let inner = Arc::clone(&self.inner);
        let text = text.to_owned();
        spawn_blocking(move || -> Result<()> {
            let ctx = inner
                .lock()
                .map_err(|_| anyhow!("clipboard context lock poisoned"))?;
            CommonClipboardImpl::write_text(&ctx, &text)
        })
        .await
        .context("Clipboard write task failed")?
    }
}
