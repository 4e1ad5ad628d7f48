//! Bounds-checking policy shared by `Vector` and `Matrix`.
//!
//! Every check runs before the caller touches storage, so a failed operation never leaves a
//! container half-modified.

use crate::core::traits::Shape;
use crate::error::{Result, UtError};

/// Validate a requested container size against `max`.
pub(crate) fn check_size(requested: isize, max: usize) -> Result<usize> {
    match usize::try_from(requested) {
        Ok(n) if n <= max => Ok(n),
        _ => {
            log::debug!("rejecting size {requested} (max {max})");
            Err(UtError::InvalidSize { requested, max })
        }
    }
}

/// Validate a requested start index; only negative values are rejected.
pub(crate) fn check_start(start: isize) -> Result<usize> {
    usize::try_from(start).map_err(|_| {
        log::debug!("rejecting negative start index {start}");
        UtError::InvalidIndex {
            index: start,
            start: 0,
            size: 0,
        }
    })
}

/// Translate an external index into a storage slot: `index - start`, which must lie in `0..size`.
pub(crate) fn slot(index: isize, start: usize, size: usize) -> Result<usize> {
    match usize::try_from(index) {
        Ok(i) if i >= start && i - start < size => Ok(i - start),
        _ => {
            log::debug!("index {index} outside [{start}, {start}+{size})");
            Err(UtError::InvalidIndex { index, start, size })
        }
    }
}

/// Binary operators require operands of equal size.
pub(crate) fn check_same_size<L: Shape, R: Shape>(left: &L, right: &R) -> Result<()> {
    let (left, right) = (left.size(), right.size());
    if left == right {
        Ok(())
    } else {
        log::debug!("operand size mismatch: {left} vs {right}");
        Err(UtError::SizeMismatch { left, right })
    }
}
