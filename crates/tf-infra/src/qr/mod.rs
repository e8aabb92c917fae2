//! QR code renderers for upload links.

mod local;
mod remote;
mod terminal;

pub use local::PngQrRenderer;
pub use remote::RemoteQrRenderer;
pub use terminal::TerminalQrRenderer;

use std::sync::Arc;

use anyhow::Result;
use tf_core::config::{QrConfig, QrStrategy};
use tf_core::ports::QrRendererPort;

/// Picks the renderer for the configured strategy. `QrStrategy::None` yields
/// no renderer at all.
pub fn renderer_for(config: &QrConfig) -> Result<Option<Arc<dyn QrRendererPort>>> {
    let renderer: Arc<dyn QrRendererPort> = match config.strategy {
        QrStrategy::Local => Arc::new(PngQrRenderer::new(config.size_px)),
        QrStrategy::Remote => Arc::new(RemoteQrRenderer::new(
            &config.remote_endpoint,
            config.size_px,
        )?),
        QrStrategy::Terminal => Arc::new(TerminalQrRenderer),
        QrStrategy::None => return Ok(None),
    };
    Ok(Some(renderer))
}
