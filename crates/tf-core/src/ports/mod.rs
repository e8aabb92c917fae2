//! Port interfaces for the application layer
//!
//! Ports define the contract between the upload pipeline and the
//! infrastructure/platform implementations, so the pipeline never reaches
//! into host-specific primitives directly.

pub mod app_dirs;
mod clipboard;
mod clock;
pub mod errors;
mod file_system;
mod notifier;
mod progress;
mod qr;
mod timer;
mod transport;

pub use app_dirs::AppDirsPort;
pub use clipboard::ClipboardPort;
pub use clock::ClockPort;
pub use errors::AppDirsError;
pub use file_system::{FileStat, FileSystemPort};
pub use notifier::{Notification, NotificationKind, NotifierPort};
pub use progress::UploadProgressPort;
pub use qr::QrRendererPort;
pub use timer::ElapsedTimerPort;
pub use transport::UploadTransportPort;
