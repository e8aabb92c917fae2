use anyhow::{Context, Result};
use async_trait::async_trait;
use qrcode::render::unicode::Dense1x2;
use qrcode::QrCode;
use tf_core::ports::QrRendererPort;
use tf_core::QrPayload;

/// Draws the code with half-block characters for display in a terminal.
///
/// Colours are inverted so the code scans on dark terminal backgrounds.
pub struct TerminalQrRenderer;

#[async_trait]
impl QrRendererPort for TerminalQrRenderer {
    async fn render(&self, link: &str) -> Result<QrPayload> {
        let code = QrCode::new(link.as_bytes()).context("Failed to encode link as QR code")?;
        let text = code
            .render::<Dense1x2>()
            .dark_color(Dense1x2::Light)
            .light_color(Dense1x2::Dark)
            .build();
        Ok(QrPayload::Text(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn renders_rectangular_block_art() -> Result<()> {
        let QrPayload::Text(text) = TerminalQrRenderer.render("https://tmpfile.link").await? else {
            panic!("expected text payload");
        };

        let widths: Vec<usize> = text.lines().map(|line| line.chars().count()).collect();
        assert!(widths.len() > 10);
        assert!(widths.iter().all(|w| *w == widths[0]));
        assert!(text.contains('█') || text.contains('▀') || text.contains('▄'));
        Ok(())
    }
}
