use thiserror::Error;

/// Errors the generator reports to the printer over the error channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("number of people must be greater than 0")]
    InvalidCount { requested: i64 },
}

/// Errors that abort a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
