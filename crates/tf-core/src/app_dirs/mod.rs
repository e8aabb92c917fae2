use std::path::PathBuf;

/// Per-user directories the host application may use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_config_root: PathBuf,
    pub app_data_root: PathBuf,
}
