//! Start/cancel handle around one upload run.

use std::sync::Arc;

use tf_core::{UploadError, UploadOutcome};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::error;

use crate::usecases::UploadClipboard;

/// One outstanding run of [`UploadClipboard`] on the tokio runtime.
///
/// Dropping the session before its outcome is collected cancels the run.
pub struct UploadSession {
    cancel: CancellationToken,
    handle: Option<JoinHandle<UploadOutcome>>,
}

impl UploadSession {
    /// Spawns a run with a fresh cancellation token.
    pub fn start(pipeline: Arc<UploadClipboard>) -> Self {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let handle = tokio::spawn(async move { pipeline.run(token).await });
        Self {
            cancel,
            handle: Some(handle),
        }
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn cancellation(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |handle| handle.is_finished())
    }

    /// Waits for the run to end.
    pub async fn outcome(mut self) -> UploadOutcome {
        let Some(handle) = self.handle.take() else {
            return UploadOutcome::Cancelled;
        };
        match handle.await {
            Ok(outcome) => outcome,
            Err(err) if err.is_cancelled() => UploadOutcome::Cancelled,
            Err(err) => {
                error!(error = %err, "Upload task panicked");
                UploadOutcome::Failure(UploadError::Interrupted(err.to_string()))
            }
        }
    }
}

impl Drop for UploadSession {
    fn drop(&mut self) {
        if self.handle.is_some() {
            self.cancel.cancel();
        }
    }
}
