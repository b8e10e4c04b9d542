mod job;
pub use job::{Job, JobResult};

mod error;
pub use error::PatternError;

mod worker;

mod worker_pool;
pub use worker_pool::WorkerPool;

mod pipeline;
pub use pipeline::Pipeline;

mod fan_out;
pub use fan_out::FanOut;

mod rate_limiter;
pub use rate_limiter::RateLimiter;

pub mod timer;
pub use timer::Timer;

pub mod tokio_timer;
pub use tokio_timer::TokioTimer;
