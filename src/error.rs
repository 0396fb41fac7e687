use thiserror::Error;

/// Convenience result type for transform and demo operations.
pub type TransformResult<T> = Result<T, TransformError>;

/// Error type returned by transforms and the demo runner.
///
/// Every transform is total over its inputs except a seedless reduce, so this stays small.
#[derive(Debug, Error)]
pub enum TransformError {
    /// `reduce` was called without an initial accumulator on an empty sequence.
    #[error("reduce of empty sequence with no initial value")]
    EmptyReduce,

    /// A demo result could not be converted into its structured report form.
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}
