use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use tf_core::clipboard::resolve_clipboard_path;
use tf_core::ports::{ElapsedTimerPort, Notification};
use tf_core::upload::{interpret_response, upload_file_name};
use tf_core::{
    ClipboardContents, ClipboardSnapshot, QrPayload, SanitizedUpload, UploadError, UploadOutcome,
    UploadReceipt, UploadStage,
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::deps::{UploadPolicy, UploadPorts};

const FAILURE_TITLE: &str = "Upload Failed";

/// Why a run stopped before producing a receipt.
enum Halt {
    Cancelled,
    Failed(UploadError),
}

impl From<UploadError> for Halt {
    fn from(err: UploadError) -> Self {
        Halt::Failed(err)
    }
}

/// Use case that uploads whatever the clipboard holds and hands back a
/// shareable link.
///
/// 读取剪贴板内容（文件优先，其次文本），上传并返回下载链接。
pub struct UploadClipboard {
    ports: UploadPorts,
    policy: UploadPolicy,
    working_dir: Option<PathBuf>,
    in_flight: AtomicBool,
}

impl UploadClipboard {
    /// Builds the use case. Relative clipboard paths resolve against the
    /// process working directory.
    pub fn from_ports(ports: UploadPorts, policy: UploadPolicy) -> Self {
        Self {
            ports,
            policy,
            working_dir: std::env::current_dir().ok(),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Overrides the directory relative clipboard paths are joined to.
    /// `None` leaves relative paths untouched.
    pub fn with_working_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.working_dir = dir;
        self
    }

    /// Runs one upload cycle to completion, failure, or cancellation.
    ///
    /// Cancellation is checked between steps and raced against every port
    /// await, so a cancelled run never uploads further, never writes the
    /// clipboard and never notifies.
    #[tracing::instrument(name = "usecase.upload_clipboard.run", skip_all)]
    pub async fn run(&self, cancel: CancellationToken) -> UploadOutcome {
        let Some(_flight) = InFlight::acquire(&self.in_flight) else {
            warn!("Upload requested while another run is outstanding");
            let err = UploadError::AlreadyInProgress;
            self.ports
                .notifier
                .notify(&Notification::failure(FAILURE_TITLE, Some(err.to_string())));
            return UploadOutcome::Failure(err);
        };
        let _timer = TimerGuard::start(self.ports.timer.as_ref());

        match self.execute(&cancel).await {
            Ok(receipt) => {
                info!(
                    file_name = %receipt.file_name,
                    size_bytes = receipt.size_bytes,
                    copied = receipt.copied_to_clipboard,
                    "Upload finished"
                );
                UploadOutcome::Success(receipt)
            }
            Err(Halt::Cancelled) => {
                info!("Upload cancelled");
                UploadOutcome::Cancelled
            }
            Err(Halt::Failed(_)) if cancel.is_cancelled() => {
                info!("Upload failed after cancellation, reporting as cancelled");
                UploadOutcome::Cancelled
            }
            Err(Halt::Failed(err)) => {
                warn!(error.kind = err.kind(), error = %err, "Upload failed");
                self.ports.progress.report(&UploadStage::Failed);
                self.ports
                    .notifier
                    .notify(&Notification::failure(FAILURE_TITLE, Some(err.to_string())));
                UploadOutcome::Failure(err)
            }
        }
    }

    async fn execute(&self, cancel: &CancellationToken) -> Result<UploadReceipt, Halt> {
        checkpoint(cancel)?;
        self.ports.progress.report(&UploadStage::CheckingClipboard);

        let contents = guarded(cancel, self.ports.clipboard.read())
            .await?
            .map_err(|e| UploadError::ClipboardUnavailable(format!("{e:#}")))?;

        checkpoint(cancel)?;
        let snapshot = self.classify(contents, cancel).await?;
        let upload = self.prepare(snapshot, cancel).await?;

        checkpoint(cancel)?;
        let size_bytes = upload.size_bytes();
        self.ports.progress.report(&UploadStage::Uploading {
            name: upload.name.clone(),
            size_bytes,
            kind: upload.kind,
        });
        debug!(name = %upload.name, size_bytes, "Submitting upload");

        let response = guarded(cancel, self.ports.transport.submit(&upload))
            .await?
            .map_err(|e| UploadError::network(format!("{e:#}")))?;
        let link = interpret_response(&response)?;

        checkpoint(cancel)?;
        let copied = self.copy_link(&link).await;
        let qr = self.render_qr(&link, cancel).await?;

        checkpoint(cancel)?;
        let title = if copied { "Uploaded & Copied!" } else { "Uploaded!" };
        self.ports
            .notifier
            .notify(&Notification::success(title, Some(link.clone())));
        self.ports.progress.report(&UploadStage::Succeeded);

        Ok(UploadReceipt {
            link,
            qr,
            file_name: upload.name,
            size_bytes,
            kind: upload.kind,
            copied_to_clipboard: copied,
        })
    }

    /// Drops a file reference that does not exist so the text entry gets a chance.
    async fn classify(
        &self,
        contents: ClipboardContents,
        cancel: &CancellationToken,
    ) -> Result<ClipboardSnapshot, Halt> {
        let mut existing = None;
        if let Some(raw) = contents.file.as_deref() {
            let path = resolve_clipboard_path(raw, self.working_dir.as_deref());
            if guarded(cancel, self.ports.file_system.exists(&path)).await? {
                existing = Some(path);
            } else {
                debug!(path = %path.display(), "Clipboard file reference does not exist");
            }
        }
        Ok(ClipboardSnapshot::classify(existing, contents))
    }

    async fn prepare(
        &self,
        snapshot: ClipboardSnapshot,
        cancel: &CancellationToken,
    ) -> Result<SanitizedUpload, Halt> {
        match snapshot {
            ClipboardSnapshot::File(path) => self.prepare_file(&path, cancel).await,
            ClipboardSnapshot::Text(text) => {
                let upload = SanitizedUpload::snippet(text, self.ports.clock.now_ms());
                self.check_size(upload.size_bytes())?;
                Ok(upload)
            }
            ClipboardSnapshot::Empty => Err(UploadError::EmptyClipboard.into()),
        }
    }

    async fn prepare_file(
        &self,
        path: &Path,
        cancel: &CancellationToken,
    ) -> Result<SanitizedUpload, Halt> {
        let stat = guarded(cancel, self.ports.file_system.stat(path))
            .await?
            .map_err(|e| unreadable(path, e))?;
        if stat.is_dir {
            return Err(UploadError::UnsupportedContent.into());
        }
        self.check_size(stat.size_bytes)?;

        checkpoint(cancel)?;
        let bytes = guarded(cancel, self.ports.file_system.read_all(path))
            .await?
            .map_err(|e| unreadable(path, e))?;
        // The file may have grown between stat and read.
        self.check_size(bytes.len() as u64)?;

        let original = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = upload_file_name(&original, &bytes);
        debug!(original = %original, name = %name, size_bytes = bytes.len(), "Prepared file upload");
        Ok(SanitizedUpload::file(name, bytes))
    }

    fn check_size(&self, size_bytes: u64) -> Result<(), UploadError> {
        if size_bytes > self.policy.max_upload_bytes {
            return Err(UploadError::SizeLimitExceeded {
                size_bytes,
                limit_bytes: self.policy.max_upload_bytes,
            });
        }
        Ok(())
    }

    async fn copy_link(&self, link: &str) -> bool {
        if !self.policy.copy_link_to_clipboard {
            return false;
        }
        match self.ports.clipboard.write_text(link).await {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "Failed to copy link to clipboard");
                false
            }
        }
    }

    async fn render_qr(
        &self,
        link: &str,
        cancel: &CancellationToken,
    ) -> Result<Option<QrPayload>, Halt> {
        let Some(renderer) = self.ports.qr_renderer.as_ref() else {
            return Ok(None);
        };
        match guarded(cancel, renderer.render(link)).await? {
            Ok(payload) => Ok(Some(payload)),
            Err(err) => {
                warn!(error = %err, "QR code generation failed");
                Ok(None)
            }
        }
    }
}

fn checkpoint(cancel: &CancellationToken) -> Result<(), Halt> {
    if cancel.is_cancelled() {
        return Err(Halt::Cancelled);
    }
    Ok(())
}

/// Races `fut` against the token; the future is dropped when the token wins.
async fn guarded<F: Future>(cancel: &CancellationToken, fut: F) -> Result<F::Output, Halt> {
    checkpoint(cancel)?;
    cancel.run_until_cancelled(fut).await.ok_or(Halt::Cancelled)
}

fn unreadable(path: &Path, err: anyhow::Error) -> UploadError {
    UploadError::FileUnreadable {
        path: path.display().to_string(),
        reason: format!("{err:#}"),
    }
}

struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

struct TimerGuard<'a>(&'a dyn ElapsedTimerPort);

impl<'a> TimerGuard<'a> {
    fn start(timer: &'a dyn ElapsedTimerPort) -> Self {
        timer.start();
        Self(timer)
    }
}

impl Drop for TimerGuard<'_> {
    fn drop(&mut self) {
        self.0.stop();
    }
}
