//! Uploader configuration model.
//!
//! Every field has a default so a partial (or missing) config file is valid.

use serde::{Deserialize, Serialize};

use crate::upload::MAX_UPLOAD_BYTES;

pub const DEFAULT_UPLOAD_ENDPOINT: &str = "https://tmpfile.link/api/upload";
pub const DEFAULT_QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploaderConfig {
    pub upload: UploadConfig,
    pub qr: QrConfig,
}

/// Upload endpoint and limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub endpoint: String,
    pub max_upload_bytes: u64,
    pub connect_timeout_secs: u64,
    /// Total request timeout. Unset means large uploads may take as long as they need.
    pub request_timeout_secs: Option<u64>,
    pub copy_link_to_clipboard: bool,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_UPLOAD_ENDPOINT.to_string(),
            max_upload_bytes: MAX_UPLOAD_BYTES,
            connect_timeout_secs: 30,
            request_timeout_secs: None,
            copy_link_to_clipboard: true,
        }
    }
}

/// How the QR code for the link is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QrStrategy {
    /// PNG rendered in-process, delivered as a data URL.
    Local,
    /// URL of a third-party rendering endpoint.
    Remote,
    /// Unicode blocks for terminal output.
    #[default]
    Terminal,
    /// No QR code.
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QrConfig {
    pub strategy: QrStrategy,
    pub size_px: u32,
    pub remote_endpoint: String,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            strategy: QrStrategy::default(),
            size_px: 180,
            remote_endpoint: DEFAULT_QR_ENDPOINT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("upload.max_upload_bytes must be greater than zero")]
    ZeroUploadLimit,

    #[error("{field} must be an http(s) URL, got {value:?}")]
    InvalidEndpoint { field: &'static str, value: String },

    #[error("qr.size_px must be greater than zero")]
    ZeroQrSize,
}

impl UploaderConfig {
    /// Reject values the pipeline cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upload.max_upload_bytes == 0 {
            return Err(ConfigError::ZeroUploadLimit);
        }
        check_http_url("upload.endpoint", &self.upload.endpoint)?;
        if self.qr.strategy == QrStrategy::Remote {
            check_http_url("qr.remote_endpoint", &self.qr.remote_endpoint)?;
        }
        if self.qr.strategy != QrStrategy::None && self.qr.size_px == 0 {
            return Err(ConfigError::ZeroQrSize);
        }
        Ok(())
    }
}

fn check_http_url(field: &'static str, value: &str) -> Result<(), ConfigError> {
    match url::Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        _ => Err(ConfigError::InvalidEndpoint {
            field,
            value: value.to_string(),
        }),
    }
}
