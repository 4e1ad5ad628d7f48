//! Upper-triangular matrix stored as a sequence of offset row vectors.
//!
//! Row `i` of an `n × n` matrix is a `Vector<T>` of length `n - i` with start index `i`, so it
//! only exposes columns `i..n`. Column bounds are enforced by the row vector itself: asking for a
//! column below the diagonal fails with `InvalidIndex` just like one past the last column.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::config::Limits;
use crate::core::bounds::{check_same_size, check_size, slot};
use crate::core::traits::{Scalar, Shape};
use crate::error::Result;
use crate::matrix::vector::Vector;

#[derive(Debug)]
pub struct Matrix<T> {
    rows: Vec<Vector<T>>,
}

impl<T: Clone + Default> Matrix<T> {
    /// `size × size` upper-triangular matrix of default values.
    pub fn new(size: isize) -> Result<Self> {
        Self::with_limits(size, &Limits::default())
    }

    /// Row 0 holds `size` elements, so `size` is bounded by both `max_matrix_size` and
    /// `max_vector_size`; the reported `max` is the smaller of the two.
    pub fn with_limits(size: isize, limits: &Limits) -> Result<Self> {
        let max = limits.max_matrix_size.min(limits.max_vector_size);
        let n = check_size(size, max)?;
        log::trace!("allocating {n}x{n} upper-triangular matrix");
        let rows = (0..n)
            .map(|i| Vector::with_limits((n - i) as isize, i as isize, limits))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rows })
    }
}

impl<T> Matrix<T> {
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Row `index`, exposing columns `index..size`.
    pub fn row(&self, index: isize) -> Result<&Vector<T>> {
        let s = slot(index, 0, self.rows.len())?;
        Ok(&self.rows[s])
    }

    /// Replace row `index` with `row`, which must have the same length as the row it replaces.
    ///
    /// `row` is aligned by position: it is re-addressed to start at column `index` whatever its
    /// own start index was.
    pub fn set_row(&mut self, index: isize, mut row: Vector<T>) -> Result<()> {
        let s = slot(index, 0, self.rows.len())?;
        check_same_size(&self.rows[s], &row)?;
        row.rebase(s);
        self.rows[s] = row;
        Ok(())
    }

    pub fn rows(&self) -> std::slice::Iter<'_, Vector<T>> {
        self.rows.iter()
    }

    pub fn get(&self, row: isize, col: isize) -> Result<&T> {
        self.row(row)?.get(col)
    }

    pub fn get_mut(&mut self, row: isize, col: isize) -> Result<&mut T> {
        let s = slot(row, 0, self.rows.len())?;
        self.rows[s].get_mut(col)
    }

    pub fn set(&mut self, row: isize, col: isize, value: T) -> Result<()> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }
}

impl<T: Scalar> Matrix<T> {
    fn zip_rows(
        &self,
        other: &Self,
        f: impl Fn(&Vector<T>, &Vector<T>) -> Result<Vector<T>>,
    ) -> Result<Self> {
        check_same_size(self, other)?;
        let rows = self
            .rows
            .iter()
            .zip(other.rows.iter())
            .map(|(a, b)| f(a, b))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rows })
    }

    /// Row-wise sum of two matrices of equal size.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.zip_rows(other, Vector::<T>::try_add)
    }

    /// Row-wise difference of two matrices of equal size.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.zip_rows(other, Vector::<T>::try_sub)
    }
}

impl<T: Clone> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.rows.clone_from(&source.rows);
    }
}

impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

impl<T: Eq> Eq for Matrix<T> {}

impl<T> Shape for Matrix<T> {
    fn size(&self) -> usize {
        self.rows.len()
    }
}

impl<T> Index<isize> for Matrix<T> {
    type Output = Vector<T>;

    fn index(&self, index: isize) -> &Vector<T> {
        self.row(index).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T> Index<(isize, isize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (isize, isize)) -> &T {
        self.get(i, j).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T> IndexMut<(isize, isize)> for Matrix<T> {
    fn index_mut(&mut self, (i, j): (isize, isize)) -> &mut T {
        self.get_mut(i, j).unwrap_or_else(|e| panic!("{e}"))
    }
}

/// One line per row; entries below the diagonal print as `T::default()`.
impl<T: fmt::Display + Default> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let zero = T::default();
        for (i, row) in self.rows.iter().enumerate() {
            for _ in 0..i {
                write!(f, "{zero} ")?;
            }
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
