//! Borrowed views over a single matrix row.
//!
//! A row view never owns data: it borrows one contiguous slice of the
//! matrix buffer and lives no longer than the borrow that produced it.

use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use crate::error::{LinalgError, Result};
use crate::math::vector::Vector;

/// Read-only view of one row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Row<'a> {
    row: usize,
    data: &'a [f64],
}

impl<'a> Row<'a> {
    pub(crate) fn new(row: usize, data: &'a [f64]) -> Self {
        Self { row, data }
    }

    /// Index of this row inside its matrix.
    pub fn row_index(&self) -> usize {
        self.row
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, col: usize) -> Result<f64> {
        self.data
            .get(col)
            .copied()
            .ok_or_else(|| column_out_of_range(col, self.data.len()))
    }

    pub fn as_slice(&self) -> &'a [f64] {
        self.data
    }

    pub fn iter(&self) -> Iter<'a, f64> {
        self.data.iter()
    }

    /// Copy the row out as an owned row vector.
    pub fn to_vector(&self) -> Result<Vector> {
        Vector::from_slice(self.data)
    }
}

impl Index<usize> for Row<'_> {
    type Output = f64;

    fn index(&self, col: usize) -> &Self::Output {
        match self.data.get(col) {
            Some(value) => value,
            None => panic!("{}", column_out_of_range(col, self.data.len())),
        }
    }
}

/// Mutable view of one row.
#[derive(Debug)]
pub struct RowMut<'a> {
    row: usize,
    data: &'a mut [f64],
}

impl<'a> RowMut<'a> {
    pub(crate) fn new(row: usize, data: &'a mut [f64]) -> Self {
        Self { row, data }
    }

    pub fn row_index(&self) -> usize {
        self.row
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, col: usize) -> Result<f64> {
        self.data
            .get(col)
            .copied()
            .ok_or_else(|| column_out_of_range(col, self.data.len()))
    }

    pub fn get_mut(&mut self, col: usize) -> Result<&mut f64> {
        let bound = self.data.len();
        self.data
            .get_mut(col)
            .ok_or_else(|| column_out_of_range(col, bound))
    }

    pub fn set(&mut self, col: usize, value: f64) -> Result<()> {
        *self.get_mut(col)? = value;
        Ok(())
    }

    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    pub fn as_slice(&self) -> &[f64] {
        &*self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut *self.data
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, f64> {
        self.data.iter_mut()
    }

    /// Give up the view and keep the underlying mutable slice.
    pub fn into_slice(self) -> &'a mut [f64] {
        self.data
    }
}

impl Index<usize> for RowMut<'_> {
    type Output = f64;

    fn index(&self, col: usize) -> &Self::Output {
        match self.data.get(col) {
            Some(value) => value,
            None => panic!("{}", column_out_of_range(col, self.data.len())),
        }
    }
}

impl IndexMut<usize> for RowMut<'_> {
    fn index_mut(&mut self, col: usize) -> &mut Self::Output {
        let bound = self.data.len();
        match self.data.get_mut(col) {
            Some(value) => value,
            None => panic!("{}", column_out_of_range(col, bound)),
        }
    }
}

fn column_out_of_range(index: usize, bound: usize) -> LinalgError {
    LinalgError::IndexOutOfRange {
        axis: "column",
        index,
        bound,
    }
}
