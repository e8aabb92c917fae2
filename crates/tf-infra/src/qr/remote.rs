use anyhow::{Context, Result};
use async_trait::async_trait;
use tf_core::ports::QrRendererPort;
use tf_core::QrPayload;
use url::Url;

/// Points at a QR image generated by a remote service; nothing is fetched here.
pub struct RemoteQrRenderer {
    endpoint: Url,
    size_px: u32,
}

impl RemoteQrRenderer {
    pub fn new(endpoint: &str, size_px: u32) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .with_context(|| format!("Invalid QR endpoint: {endpoint}"))?;
        Ok(Self { endpoint, size_px })
    }

    /// `<endpoint>?size=<n>x<n>&margin=1&data=<link>`
    pub fn image_url(&self, link: &str) -> Url {
        let size = format!("{0}x{0}", self.size_px);
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("size", &size)
            .append_pair("margin", "1")
            .append_pair("data", link);
        url
    }
}

#[async_trait]
impl QrRendererPort for RemoteQrRenderer {
    async fn render(&self, link: &str) -> Result<QrPayload> {
        Ok(QrPayload::RemoteUrl(self.image_url(link).into()))
    }
}
