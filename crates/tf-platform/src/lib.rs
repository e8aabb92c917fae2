//! Platform adapters for tflink: the system clipboard and per-user
//! directories.

pub mod app_dirs;
pub mod clipboard;

pub use app_dirs::DirsAppDirsAdapter;
pub use clipboard::SystemClipboard;
