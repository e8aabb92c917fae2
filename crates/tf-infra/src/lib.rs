//! Infrastructure adapters for tflink: HTTP upload, local filesystem, QR
//! rendering and time.

pub mod fs;
pub mod http;
pub mod qr;
pub mod time;

pub use fs::TokioFileSystem;
pub use http::ReqwestUploadTransport;
pub use qr::renderer_for;
pub use time::{SystemClock, TokioElapsedTimer};
