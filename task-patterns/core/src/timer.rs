use std::time::Duration;

/// Trait for abstracting time delays
/// Lets rate-limited dispatch run against a fake clock in tests
#[async_trait::async_trait]
pub trait Timer: Send + Sync {
    async fn sleep(&self, duration: Duration);
}
