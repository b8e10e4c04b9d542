use crate::Timer;
use std::time::Duration;

/// Tokio-backed [`Timer`] used outside of tests
#[derive(Clone, Copy, Default)]
pub struct TokioTimer;

#[async_trait::async_trait]
impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
