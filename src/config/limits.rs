//! Size ceilings applied when containers are constructed.
//!
//! The `Limits` struct carries the largest vector length and the largest matrix dimension
//! a constructor will accept. `Limits::default()` uses the crate-wide constants; callers that
//! need a tighter (or looser) bound build their own and pass it to the `with_limits`
//! constructors.

/// Default ceiling on the length of a `Vector`.
pub const MAX_VECTOR_SIZE: usize = 100_000_000;

/// Default ceiling on the dimension of a `Matrix`.
pub const MAX_MATRIX_SIZE: usize = 10_000;

/// Construction ceilings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Largest accepted vector length.
    pub max_vector_size: usize,

    /// Largest accepted matrix dimension.
    pub max_matrix_size: usize,
}

impl Limits {
    pub fn new(max_vector_size: usize, max_matrix_size: usize) -> Self {
        Self {
            max_vector_size,
            max_matrix_size,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::new(MAX_VECTOR_SIZE, MAX_MATRIX_SIZE)
    }
}
