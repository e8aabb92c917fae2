//! Configuration loading.
//!
//! The loader only reads and parses. Range and URL checks live in
//! `UploaderConfig::validate`, which wiring runs.

use std::path::Path;

use anyhow::Context;
use tf_core::config::UploaderConfig;

use crate::cli::Args;

/// Load configuration from a TOML file. Missing keys take their defaults.
pub fn load_config(config_path: &Path) -> anyhow::Result<UploaderConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))
}

/// An explicit path must load; the default location is used only when the
/// file is there; otherwise built-in defaults apply.
pub fn resolve_config(
    explicit: Option<&Path>,
    default_path: Option<&Path>,
) -> anyhow::Result<UploaderConfig> {
    match (explicit, default_path) {
        (Some(path), _) => load_config(path),
        (None, Some(path)) if path.is_file() => load_config(path),
        _ => Ok(UploaderConfig::default()),
    }
}

/// Command-line flags win over file values.
pub fn apply_cli_overrides(config: &mut UploaderConfig, args: &Args) {
    if let Some(endpoint) = &args.endpoint {
        config.upload.endpoint = endpoint.clone();
    }
    if let Some(mode) = args.qr {
        config.qr.strategy = mode.into();
    }
    if args.no_copy {
        config.upload.copy_link_to_clipboard = false;
    }
}
