use std::io::Write;

use tf_core::ports::UploadProgressPort;
use tf_core::UploadStage;
use tokio::sync::watch;

/// Latest stage of the outstanding run, observable through a watch channel.
pub struct StatusBoard {
    stage: watch::Sender<UploadStage>,
}

impl StatusBoard {
    pub fn new() -> Self {
        let (stage, _) = watch::channel(UploadStage::Idle);
        Self { stage }
    }

    pub fn subscribe(&self) -> watch::Receiver<UploadStage> {
        self.stage.subscribe()
    }

    pub fn current(&self) -> UploadStage {
        self.stage.borrow().clone()
    }

    /// Back to `Idle` before a new session starts.
    pub fn reset(&self) {
        self.stage.send_replace(UploadStage::Idle);
    }
}

impl Default for StatusBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadProgressPort for StatusBoard {
    fn report(&self, stage: &UploadStage) {
        self.stage.send_replace(stage.clone());
    }
}

/// `<status> (<n>s)`
pub fn status_text(stage: &UploadStage, elapsed_secs: u64) -> String {
    format!("{} ({elapsed_secs}s)", stage.status_text())
}

/// Renders progress to a writer.
///
/// On a terminal the line is redrawn in place. Otherwise each new stage is
/// printed once on its own line and elapsed-only changes are skipped.
pub struct StatusLine<W: Write> {
    out: W,
    interactive: bool,
    drawn: bool,
    last_stage: Option<UploadStage>,
}

impl<W: Write> StatusLine<W> {
    pub fn new(out: W, interactive: bool) -> Self {
        Self {
            out,
            interactive,
            drawn: false,
            last_stage: None,
        }
    }

    pub fn draw(&mut self, stage: &UploadStage, elapsed_secs: u64) {
        if *stage == UploadStage::Idle {
            return;
        }
        if self.interactive {
            let _ = write!(self.out, "\r\x1b[2K{}", status_text(stage, elapsed_secs));
            let _ = self.out.flush();
            self.drawn = true;
        } else if self.last_stage.as_ref() != Some(stage) {
            let _ = writeln!(self.out, "{}", stage.status_text());
        }
        self.last_stage = Some(stage.clone());
    }

    /// Erases the in-place line so later output starts clean.
    pub fn clear(&mut self) {
        if self.interactive && self.drawn {
            let _ = write!(self.out, "\r\x1b[2K");
            let _ = self.out.flush();
            self.drawn = false;
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
