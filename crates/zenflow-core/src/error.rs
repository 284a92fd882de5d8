use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("stress level must be between 1 and 5, got {0}")]
    InvalidStressLevel(u8),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(#[from] jiff::Error),
}
