use thiserror::Error;

const MIB: u64 = 1024 * 1024;

/// Why an upload run failed.
///
/// `Display` is the message shown to the user. Cancellation is not an error,
/// see [`crate::UploadOutcome::Cancelled`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Clipboard is empty or does not contain text/files.")]
    EmptyClipboard,

    #[error("Directory upload not supported. Please zip it first.")]
    UnsupportedContent,

    #[error("File exceeds {}MB limit.", .limit_bytes / MIB)]
    SizeLimitExceeded { size_bytes: u64, limit_bytes: u64 },

    #[error("{}", describe_transport(.status, .message))]
    Transport {
        status: Option<u16>,
        message: String,
    },

    #[error("Unexpected response from upload service: {0}")]
    MalformedResponse(String),

    #[error("Failed to read clipboard: {0}")]
    ClipboardUnavailable(String),

    #[error("Failed to read {path}: {reason}")]
    FileUnreadable { path: String, reason: String },

    #[error("An upload is already in progress.")]
    AlreadyInProgress,

    #[error("Upload task stopped unexpectedly: {0}")]
    Interrupted(String),
}

fn describe_transport(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("Upload failed ({code}): {message}"),
        None => format!("Upload failed: {message}"),
    }
}

impl UploadError {
    /// Non-2xx reply. An empty body reads as "Unknown error".
    pub fn http_status(status: u16, body: &str) -> Self {
        let body = body.trim();
        let message = if body.is_empty() {
            "Unknown error".to_string()
        } else {
            body.to_string()
        };
        UploadError::Transport {
            status: Some(status),
            message,
        }
    }

    /// The request never produced a response.
    pub fn network(reason: impl Into<String>) -> Self {
        UploadError::Transport {
            status: None,
            message: reason.into(),
        }
    }

    /// Short machine-friendly label, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            UploadError::EmptyClipboard => "empty_clipboard",
            UploadError::UnsupportedContent => "unsupported_content",
            UploadError::SizeLimitExceeded { .. } => "size_limit_exceeded",
            UploadError::Transport { .. } => "transport",
            UploadError::MalformedResponse(_) => "malformed_response",
            UploadError::ClipboardUnavailable(_) => "clipboard_unavailable",
            UploadError::FileUnreadable { .. } => "file_unreadable",
            UploadError::AlreadyInProgress => "already_in_progress",
            UploadError::Interrupted(_) => "interrupted",
        }
    }
}
