//! Matrix module: offset vectors and the upper-triangular matrix built from them.

pub mod upper;
pub mod vector;
pub use upper::Matrix;
pub use vector::Vector;
