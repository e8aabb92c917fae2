use anyhow::Result;
use async_trait::async_trait;

use crate::upload::QrPayload;

/// Renders a QR code for a link. Failures are never fatal to an upload.
#[async_trait]
pub trait QrRendererPort: Send + Sync {
    async fn render(&self, link: &str) -> Result<QrPayload>;
}
