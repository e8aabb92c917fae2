//! Business logic use cases
//!
//! ClipboardPort ──► UploadClipboard ──► UploadTransportPort
//!                        │
//!                        └──► clipboard write-back, QR, notification

pub mod upload_clipboard;

pub use upload_clipboard::UploadClipboard;
