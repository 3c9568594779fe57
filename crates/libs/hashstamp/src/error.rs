use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EntropyError {
    #[error("entropy source unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MintError {
    #[error("difficulty of {bits} bits exceeds the {max}-bit digest")]
    DifficultyTooHigh { bits: u32, max: u32 },
    #[error("random source failure: {0}")]
    RandomSource(#[from] EntropyError),
    #[error("stamp search cancelled")]
    Cancelled,
    #[error("no stamp found after {attempts} attempts")]
    Exhausted { attempts: u64 },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StampError {
    #[error("malformed stamp: {0}")]
    MalformedStamp(String),
    #[error("invalid bits field {0:?}")]
    InvalidBits(String),
    #[error("invalid date field {0:?}")]
    InvalidDate(String),
    #[error("stamp has expired")]
    StampExpired,
    #[error("insufficient work: {actual} leading zero bits, {required} required")]
    InsufficientWork { required: u32, actual: u32 },
    #[error("resource {actual:?} does not match {expected:?}")]
    ResourceMismatch { expected: String, actual: String },
    #[error("unsupported stamp version {0:?}")]
    UnsupportedVersion(String),
    #[error("declared difficulty {declared} does not match required {required}")]
    DifficultyMismatch { required: u32, declared: u32 },
}
