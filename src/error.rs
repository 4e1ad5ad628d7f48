use thiserror::Error;

// Unified error type for utmatrix

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtError {
    #[error("invalid size {requested} (allowed range is 0..={max})")]
    InvalidSize { requested: isize, max: usize },
    #[error("index {index} out of range for start index {start} and size {size}")]
    InvalidIndex { index: isize, start: usize, size: usize },
    #[error("size mismatch: {left} vs {right}")]
    SizeMismatch { left: usize, right: usize },
}

pub type Result<T> = std::result::Result<T, UtError>;
