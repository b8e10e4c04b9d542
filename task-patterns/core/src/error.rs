#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// A worker count of zero was requested
    NoWorkers,

    /// A dispatch rate of zero requests per second (degenerate tick interval)
    InvalidRate(u32),

    /// The producer task panicked before feeding all jobs
    ProducerPanicked,

    /// A worker task panicked instead of completing its job
    WorkerPanicked { worker_id: usize },

    /// A pipeline stage task panicked
    StagePanicked { stage: &'static str },

    /// The run was cancelled before every job produced a result
    Cancelled,
}

impl std::fmt::Display for PatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternError::NoWorkers => write!(f, "At least one worker is required"),
            PatternError::InvalidRate(rate) => {
                write!(f, "Invalid dispatch rate: {} requests per second", rate)
            }
            PatternError::ProducerPanicked => write!(f, "Producer task panicked"),
            PatternError::WorkerPanicked { worker_id } => {
                write!(f, "Worker {} panicked", worker_id)
            }
            PatternError::StagePanicked { stage } => {
                write!(f, "Pipeline stage '{}' panicked", stage)
            }
            PatternError::Cancelled => write!(f, "Run was cancelled before completion"),
        }
    }
}

impl std::error::Error for PatternError {}
