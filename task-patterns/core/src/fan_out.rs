use crate::worker::{join_workers, spawn_transform_worker};
use crate::{Job, JobResult, PatternError};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Fan-out pattern: one producer feeds a shared input queue, a dynamic
/// number of workers drain it concurrently
///
/// The output queue closes exactly when the last worker exits (each worker
/// holds its own sender clone), so the drain loop doubles as the completion
/// barrier. Results arrive in completion order.
pub struct FanOut {
    num_workers: usize,
    cancellation_token: CancellationToken,
}

impl FanOut {
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

    /// Distributes the inputs across the workers, applying `transform` to each
    pub async fn run<F>(
        &self,
        inputs: Vec<Job>,
        transform: F,
    ) -> Result<Vec<JobResult>, PatternError>
    where
        F: Fn(Job) -> JobResult + Send + Sync + 'static,
    {
        if self.num_workers == 0 {
            return Err(PatternError::NoWorkers);
        }

        let total = inputs.len();
        if total == 0 {
            return Ok(Vec::new());
        }

        let (input_tx, input_rx) = mpsc::channel::<Job>(total);
        let (output_tx, mut output_rx) = mpsc::channel::<JobResult>(total);

        // Producer feeds the input queue and closes it by dropping the sender
        let producer: JoinHandle<()> = tokio::spawn(async move {
            for input in inputs {
                if input_tx.send(input).await.is_err() {
                    break;
                }
            }
        });

        let input_rx = Arc::new(Mutex::new(input_rx));
        let transform = Arc::new(transform);

        let mut workers: Vec<JoinHandle<()>> = Vec::with_capacity(self.num_workers);
        for _ in 0..self.num_workers {
            workers.push(spawn_transform_worker(
                Arc::clone(&input_rx),
                output_tx.clone(),
                Arc::clone(&transform),
                self.cancellation_token.clone(),
            ));
        }
        drop(output_tx);

        // Drains until every worker has dropped its sender clone
        let mut results = Vec::with_capacity(total);
        while let Some(result) = output_rx.recv().await {
            results.push(result);
        }

        if producer.await.is_err() {
            return Err(PatternError::ProducerPanicked);
        }
        join_workers(workers).await?;

        if results.len() != total {
            return Err(PatternError::Cancelled);
        }
        Ok(results)
    }
}
