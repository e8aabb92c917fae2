use std::sync::Arc;

use tf_core::config::UploadConfig;
use tf_core::ports::{
    ClipboardPort, ClockPort, ElapsedTimerPort, FileSystemPort, NotifierPort, QrRendererPort,
    UploadProgressPort, UploadTransportPort,
};
use tf_core::MAX_UPLOAD_BYTES;

/// Capabilities the upload pipeline is built from.
#[derive(Clone)]
pub struct UploadPorts {
    pub clipboard: Arc<dyn ClipboardPort>,
    pub file_system: Arc<dyn FileSystemPort>,
    pub transport: Arc<dyn UploadTransportPort>,
    pub notifier: Arc<dyn NotifierPort>,
    /// `None` disables QR codes.
    pub qr_renderer: Option<Arc<dyn QrRendererPort>>,
    pub clock: Arc<dyn ClockPort>,
    pub timer: Arc<dyn ElapsedTimerPort>,
    pub progress: Arc<dyn UploadProgressPort>,
}

/// Knobs of a run that come from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPolicy {
    pub max_upload_bytes: u64,
    pub copy_link_to_clipboard: bool,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_upload_bytes: MAX_UPLOAD_BYTES,
            copy_link_to_clipboard: true,
        }
    }
}

impl From<&UploadConfig> for UploadPolicy {
    fn from(config: &UploadConfig) -> Self {
        Self {
            max_upload_bytes: config.max_upload_bytes,
            copy_link_to_clipboard: config.copy_link_to_clipboard,
        }
    }
}
