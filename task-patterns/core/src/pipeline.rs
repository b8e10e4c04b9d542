use crate::{Job, JobResult, PatternError};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const DEFAULT_STAGE_BUFFER: usize = 16;

/// Three-stage transform chain: generate -> square -> filter-even
///
/// Each stage is a single task with exactly one reader and one writer, so
/// output order equals input order filtered by the stage predicates. Stages
/// are connected by bounded channels; a slow downstream stage applies
/// backpressure instead of buffering without limit.
pub struct Pipeline {
    stage_buffer: usize,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            stage_buffer: DEFAULT_STAGE_BUFFER,
        }
    }

    /// Creates a pipeline with a custom per-stage channel capacity
    pub fn with_stage_buffer(stage_buffer: usize) -> Self {
        Self {
            stage_buffer: stage_buffer.max(1),
        }
    }

    /// Returns the even squares of the inputs, in input order
    pub async fn run(&self, inputs: Vec<Job>) -> Result<Vec<JobResult>, PatternError> {
        let (gen_rx, gen_handle) = self.generate(inputs);
        let (square_rx, square_handle) = self.square(gen_rx);
        let (mut even_rx, filter_handle) = self.filter_even(square_rx);

        let mut results = Vec::new();
        while let Some(value) = even_rx.recv().await {
            results.push(value);
        }

        gen_handle
            .await
            .map_err(|_| PatternError::StagePanicked { stage: "generate" })?;
        square_handle
            .await
            .map_err(|_| PatternError::StagePanicked { stage: "square" })?;
        filter_handle
            .await
            .map_err(|_| PatternError::StagePanicked { stage: "filter_even" })?;

        Ok(results)
    }

    /// Stage 1: feed the inputs downstream, then close the channel
    fn generate(&self, inputs: Vec<Job>) -> (mpsc::Receiver<Job>, JoinHandle<()>) {
        let (tx, rx) = mpsc::channel(self.stage_buffer);
        let handle = tokio::spawn(async move {
            for value in inputs {
                if tx.send(value).await.is_err() {
                    break;
                }
            }
        });
        (rx, handle)
    }

    /// Stage 2: square every value
    fn square(
        &self,
        mut input: mpsc::Receiver<Job>,
    ) -> (mpsc::Receiver<JobResult>, JoinHandle<()>) {
        let (tx, rx) = mpsc::channel(self.stage_buffer);
        let handle = tokio::spawn(async move {
            while let Some(value) = input.recv().await {
                if tx.send(value * value).await.is_err() {
                    break;
                }
            }
        });
        (rx, handle)
    }

    /// Stage 3: keep only even values
    fn filter_even(
        &self,
        mut input: mpsc::Receiver<JobResult>,
    ) -> (mpsc::Receiver<JobResult>, JoinHandle<()>) {
        let (tx, rx) = mpsc::channel(self.stage_buffer);
        let handle = tokio::spawn(async move {
            while let Some(value) = input.recv().await {
                if value % 2 == 0 && tx.send(value).await.is_err() {
                    break;
                }
            }
        });
        (rx, handle)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
