//! # tf-core
//!
//! Core domain models and rules for tflink.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! clipboard classification, upload naming rules, response interpretation,
//! configuration and the port traits implemented by the outer crates.

pub mod app_dirs;
pub mod clipboard;
pub mod config;
pub mod ports;
pub mod upload;

// Re-export commonly used types at the crate root
pub use clipboard::{ClipboardContents, ClipboardSnapshot};
pub use config::{ConfigError, QrConfig, QrStrategy, UploadConfig, UploaderConfig};
pub use upload::{
    QrPayload, SanitizedUpload, UploadError, UploadKind, UploadOutcome, UploadReceipt,
    UploadResponse, UploadStage, MAX_UPLOAD_BYTES,
};
