pub mod elapsed_timer;
pub mod system_clock;

pub use elapsed_timer::TokioElapsedTimer;
pub use system_clock::SystemClock;
