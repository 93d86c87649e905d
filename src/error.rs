use thiserror::Error;

/// Errors returned by spiral generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpiralError {
    /// The requested dimension cannot produce a grid.
    #[error("invalid dimension {n}: {reason}")]
    InvalidArgument { n: i64, reason: &'static str },
}

pub type SpiralResult<T> = Result<T, SpiralError>;
