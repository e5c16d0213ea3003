use thiserror::Error;

/// Main error type for the transform core surface.
///
/// Everything beyond ingest validation is a caller contract (shape set,
/// buffer installed, forward before inverse) and is not reported here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DwtError {
    /// Declared shape does not match the number of samples provided.
    #[error("ingest buffer holds {actual} samples but the dims require {expected}")]
    WrongDims { expected: usize, actual: usize },
}

/// A specialized `Result` type for transform operations.
pub type Result<T> = std::result::Result<T, DwtError>;
