//! The interactive upload loop behind the `tflink` binary.

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use chrono::Local;
use tf_app::{AppPaths, UploadSession};
use tf_core::ports::ElapsedTimerPort;
use tf_core::{UploadError, UploadOutcome};
use tracing::{info, warn};

use crate::bootstrap::config::{apply_cli_overrides, resolve_config};
use crate::bootstrap::wiring::{wire, UploaderRuntime};
use crate::cli::Args;
use crate::presenter::{render_receipt, StatusLine};

/// Conventional exit status after SIGINT.
pub const EXIT_CANCELLED: u8 = 130;

pub async fn run(args: Args, paths: Option<AppPaths>) -> ExitCode {
    match try_run(args, paths).await {
        Ok(code) => code,
        Err(err) => {
            warn!(error = %format!("{err:#}"), "tflink failed to start");
            eprintln!("tflink: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn try_run(args: Args, paths: Option<AppPaths>) -> anyhow::Result<ExitCode> {
    let default_config = paths.as_ref().map(|paths| paths.config_path.as_path());
    let mut config = resolve_config(args.config.as_deref(), default_config)?;
    apply_cli_overrides(&mut config, &args);

    let interactive = io::stderr().is_terminal();
    let runtime = wire(&config, interactive)?;

    loop {
        let outcome = drive_session(&runtime, interactive).await;
        match outcome {
            UploadOutcome::Success(receipt) => {
                print!(
                    "{}",
                    render_receipt(&receipt, runtime.timer.elapsed_secs(), Local::now())
                );
                let _ = io::stdout().flush();
                open_if_requested(args.open, &receipt.link, |link: &str| open::that(link));
                return Ok(ExitCode::SUCCESS);
            }
            UploadOutcome::Cancelled => {
                eprintln!("Upload cancelled.");
                return Ok(ExitCode::from(EXIT_CANCELLED));
            }
            UploadOutcome::Failure(err) => {
                let retryable = err != UploadError::AlreadyInProgress;
                if retryable && io::stdin().is_terminal() && prompt_retry().await {
                    info!("Retrying upload");
                    continue;
                }
                return Ok(ExitCode::FAILURE);
            }
        }
    }
}

/// Runs one session to its end, redrawing the status line and turning
/// Ctrl-C into cancellation.
async fn drive_session(runtime: &UploaderRuntime, interactive: bool) -> UploadOutcome {
    // A retry must not redraw the stage the previous session ended on.
    runtime.status.reset();
    let mut stage_rx = runtime.status.subscribe();
    let mut elapsed_rx = runtime.timer.subscribe();
    let mut line = StatusLine::new(io::stderr(), interactive);

    let session = UploadSession::start(runtime.pipeline.clone());
    let cancel = session.cancellation();
    let outcome = session.outcome();
    tokio::pin!(outcome);

    let outcome = loop {
        tokio::select! {
            outcome = &mut outcome => break outcome,
            _ = tokio::signal::ctrl_c(), if !cancel.is_cancelled() => {
                info!("Ctrl-C received, cancelling upload");
                cancel.cancel();
            }
            Ok(()) = stage_rx.changed() => {
                let stage = stage_rx.borrow_and_update().clone();
                line.draw(&stage, *elapsed_rx.borrow());
            }
            Ok(()) = elapsed_rx.changed() => {
                let elapsed = *elapsed_rx.borrow_and_update();
                line.draw(&stage_rx.borrow(), elapsed);
            }
        }
    };
    line.clear();
    outcome
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

async fn prompt_retry() -> bool {
    eprint!("Retry? [y/N] ");
    let _ = io::stderr().flush();
    let answer = tokio::task::spawn_blocking(|| {
        let mut line = String::new();
        io::stdin().read_line(&mut line).map(|_| line)
    })
    .await;
    matches!(answer, Ok(Ok(line)) if is_yes(&line))
}

/// Hands the link to the desktop's default handler when `--open` was given.
/// Returns whether the opener accepted it.
fn open_if_requested<F>(requested: bool, link: &str, opener: F) -> bool
where
    F: FnOnce(&str) -> io::Result<()>,
{
    if !requested {
        return false;
    }
    match opener(link) {
        Ok(()) => true,
        Err(err) => {
            warn!(error = %err, "Failed to open browser");
            eprintln!("Could not open a browser: {err}");
            false
        }
    }
}
