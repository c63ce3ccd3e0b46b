use thiserror::Error;

/// Errors raised while building or writing a DOT document.
///
/// All of them are caller errors raised synchronously; a failing operation
/// leaves the arena and its documents unmodified.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed call shape: too few edge endpoints, an unknown attribute
    /// statement target, or a graph handle from another arena.
    #[error("invalid argument: {0}")]
    Argument(String),

    /// Invalid subgraph composition: strict subgraph, kind mismatch, or
    /// arguments that are not the sole argument.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Failure of the sink passed to [`Arena::write_to`](crate::Arena::write_to).
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
