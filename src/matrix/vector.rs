//! Offset, bounds-checked dense vector.
//!
//! A `Vector<T>` owns `size` contiguous elements and exposes them through external indices
//! `start_index..start_index + size`. Copies are always deep; binary arithmetic aligns operands by
//! position, so two vectors with different start indices but equal sizes can still be combined.

use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

use crate::config::Limits;
use crate::core::bounds::{check_same_size, check_size, check_start, slot};
use crate::core::traits::{Scalar, Shape};
use crate::error::Result;

#[derive(Debug)]
pub struct Vector<T> {
    data: Vec<T>,
    start_index: usize,
}

impl<T: Clone + Default> Vector<T> {
    /// `size` default-valued elements starting at external index 0.
    pub fn new(size: isize) -> Result<Self> {
        Self::with_start(size, 0)
    }

    /// `size` default-valued elements addressed from `start`.
    pub fn with_start(size: isize, start: isize) -> Result<Self> {
        Self::with_limits(size, start, &Limits::default())
    }

    /// Like `with_start`, checked against a caller-supplied ceiling.
    pub fn with_limits(size: isize, start: isize, limits: &Limits) -> Result<Self> {
        let n = check_size(size, limits.max_vector_size)?;
        let start_index = check_start(start)?;
        log::trace!("allocating vector of {n} elements at start index {start_index}");
        Ok(Self {
            data: vec![T::default(); n],
            start_index,
        })
    }
}

impl<T> Vector<T> {
    /// Wrap existing values; the first one is addressed by `start`.
    pub fn from_vec(data: Vec<T>, start: isize) -> Result<Self> {
        let requested = isize::try_from(data.len()).unwrap_or(isize::MAX);
        check_size(requested, Limits::default().max_vector_size)?;
        let start_index = check_start(start)?;
        Ok(Self { data, start_index })
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    pub fn get(&self, index: isize) -> Result<&T> {
        let s = slot(index, self.start_index, self.data.len())?;
        Ok(&self.data[s])
    }

    pub fn get_mut(&mut self, index: isize) -> Result<&mut T> {
        let s = slot(index, self.start_index, self.data.len())?;
        Ok(&mut self.data[s])
    }

    pub fn set(&mut self, index: isize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Elements in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Replace the start index, keeping the elements.
    pub(crate) fn rebase(&mut self, start_index: usize) {
        self.start_index = start_index;
    }
}

impl<T: Scalar> Vector<T> {
    fn map(&self, f: impl Fn(T) -> T) -> Self {
        Self {
            data: self.data.iter().map(|&x| f(x)).collect(),
            start_index: self.start_index,
        }
    }

    fn zip_with(&self, other: &Self, f: impl Fn(T, T) -> T) -> Result<Self> {
        check_same_size(self, other)?;
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
            start_index: self.start_index,
        })
    }

    pub fn add_scalar(&self, c: T) -> Self {
        self.map(|x| x + c)
    }

    pub fn sub_scalar(&self, c: T) -> Self {
        self.map(|x| x - c)
    }

    pub fn mul_scalar(&self, c: T) -> Self {
        self.map(|x| x * c)
    }

    /// Elementwise sum; the result keeps `self`'s start index.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Elementwise difference; the result keeps `self`'s start index.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Compute dot(self, other) = Σ selfᵢ·otherᵢ.
    pub fn dot(&self, other: &Self) -> Result<T> {
        check_same_size(self, other)?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            start_index: self.start_index,
        }
    }

    /// Assignment: adopts `source`'s size and start index, reusing the allocation when it can.
    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.start_index = source.start_index;
    }
}

/// Size and element values only; the start index does not take part.
impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T> Shape for Vector<T> {
    fn size(&self) -> usize {
        self.data.len()
    }
}

impl<T> Index<isize> for Vector<T> {
    type Output = T;

    fn index(&self, index: isize) -> &T {
        self.get(index).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T> IndexMut<isize> for Vector<T> {
    fn index_mut(&mut self, index: isize) -> &mut T {
        self.get_mut(index).unwrap_or_else(|e| panic!("{e}"))
    }
}

// Scalar operators. The borrowed forms allocate a new vector, the owned forms update in place.

impl<T: Scalar> Add<T> for &Vector<T> {
    type Output = Vector<T>;
    fn add(self, c: T) -> Vector<T> {
        self.add_scalar(c)
    }
}

impl<T: Scalar> Sub<T> for &Vector<T> {
    type Output = Vector<T>;
    fn sub(self, c: T) -> Vector<T> {
        self.sub_scalar(c)
    }
}

impl<T: Scalar> Mul<T> for &Vector<T> {
    type Output = Vector<T>;
    fn mul(self, c: T) -> Vector<T> {
        self.mul_scalar(c)
    }
}

impl<T: Scalar> Add<T> for Vector<T> {
    type Output = Vector<T>;
    fn add(mut self, c: T) -> Vector<T> {
        self.data.iter_mut().for_each(|x| *x = *x + c);
        self
    }
}

impl<T: Scalar> Sub<T> for Vector<T> {
    type Output = Vector<T>;
    fn sub(mut self, c: T) -> Vector<T> {
        self.data.iter_mut().for_each(|x| *x = *x - c);
        self
    }
}

impl<T: Scalar> Mul<T> for Vector<T> {
    type Output = Vector<T>;
    fn mul(mut self, c: T) -> Vector<T> {
        self.data.iter_mut().for_each(|x| *x = *x * c);
        self
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, x) in self.data.iter().enumerate() {
            if k > 0 {
                write!(f, " ")?;
            }
            write!(f, "{x}")?;
        }
        Ok(())
    }
}
