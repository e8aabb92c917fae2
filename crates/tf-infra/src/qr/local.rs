use std::io::Cursor;

use anyhow::{Context, Result};
use async_trait::async_trait;
use base64::prelude::{Engine as _, BASE64_STANDARD};
use image::{DynamicImage, ImageFormat, Luma};
use qrcode::QrCode;
use tf_core::ports::QrRendererPort;
use tf_core::QrPayload;

/// Renders the link to a PNG locally and hands it back as a `data:` URL.
pub struct PngQrRenderer {
    size_px: u32,
}

impl PngQrRenderer {
    pub fn new(size_px: u32) -> Self {
        Self { size_px }
    }
}

fn encode_png_data_url(link: &str, size_px: u32) -> Result<String> {
    let code = QrCode::new(link.as_bytes()).context("Failed to encode link as QR code")?;
    let image = code
        .render::<Luma<u8>>()
        .min_dimensions(size_px, size_px)
        .build();

    let mut png = Cursor::new(Vec::new());
    DynamicImage::ImageLuma8(image)
        .write_to(&mut png, ImageFormat::Png)
        .context("Failed to write QR code PNG")?;

    Ok(format!(
        "data:image/png;base64,{}",
        BASE64_STANDARD.encode(png.into_inner())
    ))
}

#[async_trait]
impl QrRendererPort for PngQrRenderer {
    async fn render(&self, link: &str) -> Result<QrPayload> {
        let link = link.to_owned();
        let size_px = self.size_px;
        let data_url = tokio::task::spawn_blocking(move || encode_png_data_url(&link, size_px))
            .await
            .context("QR rendering task failed")??;
        Ok(QrPayload::DataUrl(data_url))
    }
}
