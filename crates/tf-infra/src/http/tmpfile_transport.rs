//! Multipart upload to a tmpfile.link compatible endpoint.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Body;
use tf_core::config::UploadConfig;
use tf_core::ports::UploadTransportPort;
use tf_core::{SanitizedUpload, UploadResponse};
use tracing::debug;
use url::Url;

const FILE_FIELD: &str = "file";
const USER_AGENT: &str = concat!("tflink/", env!("CARGO_PKG_VERSION"));

/// Sends each upload as a single `file` part of a multipart POST.
pub struct ReqwestUploadTransport {
    client: reqwest::Client,
    endpoint: Url,
}

impl ReqwestUploadTransport {
    pub fn new(config: &UploadConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint)
            .with_context(|| format!("Invalid upload endpoint: {}", config.endpoint))?;

        let mut builder = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs));
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn form(upload: &SanitizedUpload) -> Result<Form> {
        let body = Body::from(upload.bytes.clone());
        let mut part =
            Part::stream_with_length(body, upload.size_bytes()).file_name(upload.name.clone());
        if let Some(content_type) = upload.content_type.as_deref() {
            part = part
                .mime_str(content_type)
                .with_context(|| format!("Invalid content type: {content_type}"))?;
        }
        Ok(Form::new().part(FILE_FIELD, part))
    }
}

#[async_trait]
impl UploadTransportPort for ReqwestUploadTransport {
    #[tracing::instrument(
        name = "infra.http.upload",
        skip_all,
        fields(name = %upload.name, size_bytes = upload.size_bytes())
    )]
    async fn submit(&self, upload: &SanitizedUpload) -> Result<UploadResponse> {
        let form = Self::form(upload)?;
        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = if status.is_success() {
            response.text().await?
        } else {
            // The status alone is enough to report a rejection.
            response.text().await.unwrap_or_default()
        };
        debug!(status = status.as_u16(), body_len = body.len(), "Upload response received");

        Ok(UploadResponse::new(status.as_u16(), body))
    }
}
