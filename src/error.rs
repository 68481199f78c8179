use thiserror::Error;

/// Arithmetic failures raised by GF(256) operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Division (or inversion) by the zero element
    #[error("Division by zero in GF(256)")]
    DivideByZero,
}

/// Failures of the randomness capability consumed while splitting
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RandomError {
    /// The underlying entropy source reported an error
    #[error("Random source unavailable: {0}")]
    RandomUnavailable(String),

    /// Rejection sampling for a non-zero leading coefficient gave up
    #[error("Leading coefficient still zero after {attempts} draws")]
    InsufficientRandomness { attempts: usize },
}

/// Invalid threshold / share count parameters
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Threshold or share count does not fit the 8-bit index space
    #[error("Threshold {threshold} or share count {share_count} exceeds 255")]
    UnsupportedLength { threshold: usize, share_count: usize },

    /// A threshold below 2 cannot hide anything
    #[error("Threshold {0} is too low, must be at least 2")]
    ThresholdTooLow(usize),

    /// Threshold exceeds total shares
    #[error("Threshold {threshold} exceeds share count {share_count}")]
    ThresholdLargerThanShares { threshold: usize, share_count: usize },
}

/// Failures while recombining shares
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombineError {
    /// Shares carry payloads of different lengths
    #[error("Share payload length mismatch: expected {expected}, got {found}")]
    ShareDataLengthMismatch { expected: usize, found: usize },

    /// Interpolation failed, typically two shares with the same index
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// Malformed share representations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Invalid share representation: {0}")]
    InvalidRepresentation(String),
}

/// Umbrella error type for the crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShamirError {
    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Random(#[from] RandomError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Combine(#[from] CombineError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ShamirError>;
