use crate::{Job, JobResult, PatternError};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Worker loop shared by WorkerPool and FanOut: pull the next job from the
/// shared receiver, apply the transform, push the result. Exits when the job
/// queue closes, the result queue closes, or cancellation is signalled.
pub(crate) fn spawn_transform_worker<F>(
    job_rx: Arc<Mutex<mpsc::Receiver<Job>>>,
    result_tx: mpsc::Sender<JobResult>,
    transform: Arc<F>,
    cancel_token: CancellationToken,
) -> JoinHandle<()>
where
    F: Fn(Job) -> JobResult + Send + Sync + 'static,
{
    tokio::spawn(async move {
        loop {
            if cancel_token.is_cancelled() {
                break;
            }

            // Hold the lock only while receiving, not while transforming
            let job = {
                let mut rx = job_rx.lock().await;
                match rx.recv().await {
                    Some(job) => job,
                    None => break,
                }
            };

            if result_tx.send(transform(job)).await.is_err() {
                break;
            }
        }
    })
}

/// Waits for every worker task, surfacing the first panic as a tagged error
pub(crate) async fn join_workers(workers: Vec<JoinHandle<()>>) -> Result<(), PatternError> {
    for (worker_id, handle) in workers.into_iter().enumerate() {
        if handle.await.is_err() {
            return Err(PatternError::WorkerPanicked { worker_id });
        }
    }
    Ok(())
}
