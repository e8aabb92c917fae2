use std::path::PathBuf;

use tf_core::app_dirs::AppDirs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self {
            config_path: dirs.app_config_root.join("config.toml"),
            logs_dir: dirs.app_data_root.join("logs"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_paths_derives_concrete_locations_from_roots() {
        let dirs = AppDirs {
            app_config_root: PathBuf::from("/home/me/.config/tflink"),
            app_data_root: PathBuf::from("/home/me/.local/share/tflink"),
        };

        let paths = AppPaths::from_app_dirs(&dirs);

        assert_eq!(
            paths.config_path,
            PathBuf::from("/home/me/.config/tflink/config.toml")
        );
        assert_eq!(
            paths.logs_dir,
            PathBuf::from("/home/me/.local/share/tflink/logs")
        );
    }
}
