use super::{UploadError, UploadKind};

/// A rendered QR code for the shareable link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QrPayload {
    /// Locally rendered PNG, `data:image/png;base64,...`.
    DataUrl(String),
    /// Image served by a third-party rendering endpoint.
    RemoteUrl(String),
    /// Unicode block rendering, printable in a terminal.
    Text(String),
}

/// Everything the presentation layer needs after a successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub link: String,
    pub qr: Option<QrPayload>,
    pub file_name: String,
    pub size_bytes: u64,
    pub kind: UploadKind,
    /// `false` when writing the link back to the clipboard failed or was disabled.
    pub copied_to_clipboard: bool,
}

/// Terminal state of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Success(UploadReceipt),
    Failure(UploadError),
    Cancelled,
}

impl UploadOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Success(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, UploadOutcome::Cancelled)
    }

    pub fn receipt(&self) -> Option<&UploadReceipt> {
        match self {
            UploadOutcome::Success(receipt) => Some(receipt),
            _ => None,
        }
    }

    pub fn link(&self) -> Option<&str> {
        self.receipt().map(|receipt| receipt.link.as_str())
    }

    pub fn error(&self) -> Option<&UploadError> {
        match self {
            UploadOutcome::Failure(err) => Some(err),
            _ => None,
        }
    }
}

/// Progress of an outstanding run, for status displays.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadStage {
    #[default]
    Idle,
    CheckingClipboard,
    Uploading {
        name: String,
        size_bytes: u64,
        kind: UploadKind,
    },
    Succeeded,
    Failed,
}

impl UploadStage {
    pub fn status_text(&self) -> String {
        match self {
            UploadStage::Idle => "Initializing...".to_string(),
            UploadStage::CheckingClipboard => "Checking clipboard...".to_string(),
            UploadStage::Uploading {
                kind: UploadKind::Snippet,
                ..
            } => "Uploading text snippet...".to_string(),
            UploadStage::Uploading { name, .. } => format!("Uploading \"{name}\"..."),
            UploadStage::Succeeded => "Successfully Uploaded!".to_string(),
            UploadStage::Failed => "Failed".to_string(),
        }
    }
}
