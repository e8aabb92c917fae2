use std::sync::{Arc, Mutex, PoisonError};

use tf_core::ports::ElapsedTimerPort;
use tokio::sync::watch;
use tokio::task::AbortHandle;
use tokio::time::{interval_at, Duration, Instant};
use tracing::{debug, warn};

const TICK: Duration = Duration::from_secs(1);

/// Whole-second counter driven by a spawned ticker task.
///
/// Observers follow the count through [`TokioElapsedTimer::subscribe`].
pub struct TokioElapsedTimer {
    elapsed: Arc<watch::Sender<u64>>,
    ticker: Mutex<Option<AbortHandle>>,
}

impl TokioElapsedTimer {
    pub fn new() -> Self {
        let (elapsed, _) = watch::channel(0);
        Self {
            elapsed: Arc::new(elapsed),
            ticker: Mutex::new(None),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.elapsed.subscribe()
    }

    fn take_ticker(&self) -> Option<AbortHandle> {
        self.ticker
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl Default for TokioElapsedTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl ElapsedTimerPort for TokioElapsedTimer {
    fn start(&self) {
        let mut ticker = self.ticker.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = ticker.take() {
            existing.abort();
        }
        self.elapsed.send_replace(0);

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!("No tokio runtime, elapsed timer will not tick");
            return;
        };
        let elapsed = Arc::clone(&self.elapsed);
        let handle = runtime.spawn(async move {
            let mut interval = interval_at(Instant::now() + TICK, TICK);
            loop {
                interval.tick().await;
                elapsed.send_modify(|secs| *secs += 1);
            }
        });
        *ticker = Some(handle.abort_handle());
        debug!("Elapsed timer started");
    }

    fn stop(&self) {
        if let Some(handle) = self.take_ticker() {
            handle.abort();
            debug!(elapsed_secs = self.elapsed_secs(), "Elapsed timer stopped");
        }
    }

    fn elapsed_secs(&self) -> u64 {
        *self.elapsed.borrow()
    }
}

impl Drop for TokioElapsedTimer {
    fn drop(&mut self) {
        if let Some(handle) = self.take_ticker() {
            handle.abort();
        }
    }
}
