//! Terminal presentation: notifications, the live status line and the final
//! upload report.

pub mod console;
pub mod report;
pub mod status;

pub use console::ConsoleNotifier;
pub use report::render_receipt;
pub use status::{StatusBoard, StatusLine};
