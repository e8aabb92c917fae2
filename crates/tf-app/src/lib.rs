//! tflink application layer
//!
//! Hosts the clipboard upload use case and the session wrapper presentation
//! layers use to start and cancel it.

pub mod app_paths;
pub mod deps;
pub mod session;
pub mod usecases;

pub use app_paths::AppPaths;
pub use deps::{UploadPolicy, UploadPorts};
pub use session::UploadSession;
pub use tokio_util::sync::CancellationToken;
pub use usecases::UploadClipboard;
