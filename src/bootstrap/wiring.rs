//! Dependency wiring: builds the upload pipeline from configuration.

use std::sync::Arc;

use anyhow::Context;
use tf_app::{UploadClipboard, UploadPolicy, UploadPorts};
use tf_core::config::UploaderConfig;
use tf_core::ports::ClipboardPort;
use tf_infra::{renderer_for, ReqwestUploadTransport, SystemClock, TokioElapsedTimer, TokioFileSystem};
use tf_platform::SystemClipboard;
use tracing::info;

use crate::presenter::{ConsoleNotifier, StatusBoard};

/// The pipeline plus the observers the host renders from.
pub struct UploaderRuntime {
    pub pipeline: Arc<UploadClipboard>,
    pub status: Arc<StatusBoard>,
    pub timer: Arc<TokioElapsedTimer>,
}

/// Wires the pipeline against the system clipboard.
pub fn wire(config: &UploaderConfig, interactive: bool) -> anyhow::Result<UploaderRuntime> {
    let clipboard = SystemClipboard::new().context("Failed to open the system clipboard")?;
    wire_with_clipboard(config, Arc::new(clipboard), interactive)
}

pub fn wire_with_clipboard(
    config: &UploaderConfig,
    clipboard: Arc<dyn ClipboardPort>,
    interactive: bool,
) -> anyhow::Result<UploaderRuntime> {
    config.validate().context("Invalid configuration")?;

    let transport = ReqwestUploadTransport::new(&config.upload)?;
    let qr_renderer = renderer_for(&config.qr)?;
    let timer = Arc::new(TokioElapsedTimer::new());
    let status = Arc::new(StatusBoard::new());

    info!(
        endpoint = %transport.endpoint(),
        qr = ?config.qr.strategy,
        copy_link = config.upload.copy_link_to_clipboard,
        "Upload pipeline wired"
    );

    let ports = UploadPorts {
        clipboard,
        file_system: Arc::new(TokioFileSystem),
        transport: Arc::new(transport),
        notifier: Arc::new(ConsoleNotifier::new(interactive)),
        qr_renderer,
        clock: Arc::new(SystemClock),
        timer: timer.clone(),
        progress: status.clone(),
    };
    let pipeline = UploadClipboard::from_ports(ports, UploadPolicy::from(&config.upload));

    Ok(UploaderRuntime {
        pipeline: Arc::new(pipeline),
        status,
        timer,
    })
}
