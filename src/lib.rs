//! utmatrix: bounds-checked offset vectors and upper-triangular matrices
//!
//! This crate provides `Vector<T>`, an owning dense vector addressed through an offset start
//! index, and `Matrix<T>`, an upper-triangular square matrix whose rows are such vectors. Both
//! have value semantics (copies are deep), validate every index and size, and report failures
//! through [`UtError`].

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;

// Re-exports for convenience
pub use config::*;
pub use crate::core::traits::*;
pub use error::*;
pub use matrix::*;
