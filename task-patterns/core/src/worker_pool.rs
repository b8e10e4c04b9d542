use crate::worker::{join_workers, spawn_transform_worker};
use crate::{Job, JobResult, PatternError};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Fixed-size pool of workers consuming jobs from a shared queue
///
/// Every submitted job yields exactly one result; results arrive in
/// completion order, not submission order.
pub struct WorkerPool {
    num_workers: usize,
    cancellation_token: CancellationToken,
}

impl WorkerPool {
    pub fn new(num_workers: usize) -> Self {
        Self {
            num_workers,
            cancellation_token: CancellationToken::new(),
        }
    }

    /// Returns a clone of the cancellation token for external control
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation_token.clone()
    }

    /// Runs the pool over the given jobs, applying `transform` to each
    ///
    /// Idle workers (when `num_workers` exceeds the job count) find the job
    /// queue closed and exit cleanly. A panicking worker is reported as
    /// `WorkerPanicked` instead of taking the process down.
    pub async fn run<F>(&self, jobs: Vec<Job>, transform: F) -> Result<Vec<JobResult>, PatternError>
    where
        F: Fn(Job) -> JobResult + Send + Sync + 'static,
    {
        if self.num_workers == 0 {
            return Err(PatternError::NoWorkers);
        }

        let total = jobs.len();
        if total == 0 {
            return Ok(Vec::new());
        }

        // Queue capacity equals the job count, so enqueueing never blocks
        let (job_tx, job_rx) = mpsc::channel::<Job>(total);
        let (result_tx, mut result_rx) = mpsc::channel::<JobResult>(total);

        for job in jobs {
            if job_tx.send(job).await.is_err() {
                break;
            }
        }
        // Close the job queue so workers stop iterating once it drains
        drop(job_tx);

        let job_rx = Arc::new(Mutex::new(job_rx));
        let transform = Arc::new(transform);

        let mut workers: Vec<JoinHandle<()>> = Vec::with_capacity(self.num_workers);
        for _ in 0..self.num_workers {
            workers.push(spawn_transform_worker(
                Arc::clone(&job_rx),
                result_tx.clone(),
                Arc::clone(&transform),
                self.cancellation_token.clone(),
            ));
        }
        // Workers hold the only remaining senders; the result queue closes
        // once the last worker exits
        drop(result_tx);

        let mut results = Vec::with_capacity(total);
        while let Some(result) = result_rx.recv().await {
            results.push(result);
        }

        join_workers(workers).await?;

        if results.len() != total {
            return Err(PatternError::Cancelled);
        }
        Ok(results)
    }
}
