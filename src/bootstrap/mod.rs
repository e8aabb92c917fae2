//! Process bootstrap: configuration, logging and dependency wiring.

pub mod config;
pub mod tracing;
pub mod wiring;

use tf_app::AppPaths;
use tf_core::ports::AppDirsPort;
use tf_platform::DirsAppDirsAdapter;

/// Per-user config and log locations, when the platform has them.
pub fn resolve_app_paths() -> Option<AppPaths> {
    DirsAppDirsAdapter::new()
        .get_app_dirs()
        .ok()
        .map(|dirs| AppPaths::from_app_dirs(&dirs))
}
