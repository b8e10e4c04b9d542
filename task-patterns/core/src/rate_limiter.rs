use crate::{PatternError, Timer};
use std::time::Duration;

/// Serial task dispatcher that spaces dispatches by a fixed interval
///
/// Not concurrent: each dispatch waits out one full period before firing, so
/// task `i` fires no earlier than `i / rate` seconds after the first tick.
pub struct RateLimiter<T: Timer> {
    period: Duration,
    timer: T,
}

impl<T: Timer> RateLimiter<T> {
    /// Creates a limiter allowing `requests_per_second` dispatches
    ///
    /// A rate of zero has no meaningful tick interval and is rejected.
    pub fn new(requests_per_second: u32, timer: T) -> Result<Self, PatternError> {
        if requests_per_second == 0 {
            return Err(PatternError::InvalidRate(requests_per_second));
        }
        Ok(Self {
            period: Duration::from_secs(1) / requests_per_second,
            timer,
        })
    }

    /// Dispatches every task in order, invoking `on_dispatch` for each
    /// Returns the number of tasks dispatched
    pub async fn dispatch<F>(&self, tasks: &[String], mut on_dispatch: F) -> usize
    where
        F: FnMut(usize, &str),
    {
        for (index, task) in tasks.iter().enumerate() {
            self.timer.sleep(self.period).await;
            on_dispatch(index, task);
        }
        tasks.len()
    }
}
