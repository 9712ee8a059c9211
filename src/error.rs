//! Error type shared by every structure in the crate.

use thiserror::Error;

/// Error type for heap, priority queue and set operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// `top` or `pop` was called on an empty structure
    #[error("operation requires a non-empty heap")]
    Empty,
    /// The requested branching factor is outside `(2, 64]`
    #[error("arity {arity} is out of range, expected 2 < K <= 64")]
    InvalidArity { arity: usize },
    /// The value is not stored in the structure
    #[error("value is not present")]
    NotFound,
    /// Keys and values passed to a constructor differ in length
    #[error("got {keys} keys for {values} values")]
    LengthMismatch { keys: usize, values: usize },
    /// The value is already stored and values must be unique
    #[error("value is already present")]
    Duplicate,
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, HeapError>;
