//! Command-line arguments for the `tflink` binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tf_core::config::QrStrategy;

/// How the QR code for the link is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum QrMode {
    /// PNG rendered locally, printed as a data URL
    Local,
    /// Image URL on a QR web service
    Remote,
    /// Block characters drawn in the terminal
    Terminal,
    /// No QR code
    None,
}

impl From<QrMode> for QrStrategy {
    fn from(mode: QrMode) -> Self {
        match mode {
            QrMode::Local => QrStrategy::Local,
            QrMode::Remote => QrStrategy::Remote,
            QrMode::Terminal => QrStrategy::Terminal,
            QrMode::None => QrStrategy::None,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "tflink")]
#[command(about = "Upload the clipboard to tmpfile.link and copy the share link")]
#[command(
    long_about = "Upload whatever is on the clipboard to tmpfile.link.

A copied file is uploaded as-is (directories are refused, 100MB max). Copied
text is uploaded as a snippet_<timestamp>.txt file. The download link is copied
back to the clipboard and printed together with a QR code. Uploads are kept
for 7 days.

Press Ctrl-C to cancel an upload in progress."
)]
#[command(version)]
pub struct Args {
    /// Config file (default: <config dir>/tflink/config.toml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// QR code output
    #[arg(long, value_enum, value_name = "MODE")]
    pub qr: Option<QrMode>,

    /// Upload endpoint
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Leave the clipboard untouched after upload
    #[arg(long)]
    pub no_copy: bool,

    /// Open the link in the default browser after upload
    #[arg(long)]
    pub open: bool,

    /// Mirror logs to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
