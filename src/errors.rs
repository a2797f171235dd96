use thiserror::Error;

/// Custom error types for the minispec reporting edge.
///
/// Evaluating a verifier never returns an error: every fault raised while a
/// check runs is absorbed into its `Outcome`. Errors only exist where the
/// report leaves the process, at the output destination.
#[derive(Debug, Error)]
pub enum MinispecError {
    #[error("Report output error: {0}")]
    OutputError(#[from] std::io::Error),

    #[error("Report file error for {path}: {message}")]
    ReportFileError { path: String, message: String },
}

/// Result type specific to minispec operations
pub type MinispecResult<T> = Result<T, MinispecError>;
