//! Core element and shape traits for utmatrix.

use std::fmt::Debug;

/// Element type usable in container arithmetic.
///
/// Blanket-implemented for every `Copy` numeric type, so `i32`, `u64`, `f64`, … all qualify.
pub trait Scalar: num_traits::Num + Copy + Default + Debug {}

impl<T: num_traits::Num + Copy + Default + Debug> Scalar for T {}

/// Uniform size query for vectors and matrices.
pub trait Shape {
    /// Number of elements (vector) or rows (matrix).
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
