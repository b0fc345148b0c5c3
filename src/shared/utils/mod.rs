pub mod logger;
pub mod time_bound;

pub use logger::{init_logger, LogContext, TimedOperation};
pub use time_bound::{DegradationObserver, LoggingObserver, TimeBoundedExecutor};
