//! Lap timer that reports through a logger

use super::logger::Logger;
use std::time::Instant;

/// Logs `Timer starts` when created and `"<message> <N> ms"` on every lap,
/// `N` being the milliseconds since the previous lap (or the start).
///
/// # Examples
///
/// ```
/// use rust_pipeline_logger::prelude::*;
///
/// let mut timer = Timer::new(Logger::from_sink(NullSink));
/// timer.lap("parsed config");
/// timer.lap("connected");
/// ```
pub struct Timer {
    logger: Logger,
    last: Instant,
}

impl Timer {
    pub fn new(logger: Logger) -> Self {
        logger.log(("Timer starts",));
        Self {
            logger,
            last: Instant::now(),
        }
    }

    pub fn lap(&mut self, message: &str) {
        let now = Instant::now();
        let elapsed_ms = now.duration_since(self.last).as_millis();
        self.logger
            .stream()
            .append(message)
            .append(' ')
            .append(elapsed_ms)
            .append(" ms");
        self.last = now;
    }
}
