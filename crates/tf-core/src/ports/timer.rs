/// Advisory elapsed-seconds counter shown while an upload runs.
///
/// `start` resets the counter to zero; `stop` freezes it. Both must be cheap
/// and safe to call repeatedly.
pub trait ElapsedTimerPort: Send + Sync {
    fn start(&self);
    fn stop(&self);
    fn elapsed_secs(&self) -> u64;
}
