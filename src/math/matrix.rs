use std::fmt;
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use rand::Rng;

use crate::config::{LinalgConfig, TraceLevel};
use crate::error::{LinalgError, Result};
use crate::math::format::write_element;
use crate::math::row::{Row, RowMut};

/// Width (columns) and height (rows) of a matrix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Shape {
    pub width: usize,
    pub height: usize,
}

impl Shape {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Number of elements a buffer of this shape holds.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Dense row-major matrix of `f64`.
///
/// The matrix exclusively owns its buffer, and `value(r, c)` lives at
/// `data[r * width + c]`. Width and height are at least 1 except in the
/// moved-from state left behind by [`Matrix::take`], where both are 0 and the
/// buffer is empty. That state is also what [`Default`] returns.
#[derive(Debug)]
pub struct Matrix {
    data: Vec<f64>,
    width: usize,
    height: usize,
    trace: TraceLevel,
}

impl Matrix {
    /// Square `size` x `size` matrix of zeros.
    pub fn square(size: usize) -> Result<Self> {
        Self::allocate("square", size, size, 0.0, LinalgConfig::default())
    }

    pub fn square_filled(size: usize, value: f64) -> Result<Self> {
        Self::allocate("square_filled", size, size, value, LinalgConfig::default())
    }

    /// `width` x `height` matrix of zeros.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::allocate("new", width, height, 0.0, LinalgConfig::default())
    }

    pub fn filled(width: usize, height: usize, value: f64) -> Result<Self> {
        Self::allocate("filled", width, height, value, LinalgConfig::default())
    }

    /// Filled matrix that reports its lifecycle according to `config`.
    pub fn filled_with_config(
        width: usize,
        height: usize,
        value: f64,
        config: LinalgConfig,
    ) -> Result<Self> {
        Self::allocate("filled", width, height, value, config)
    }

    /// Build from a rectangular literal, one slice per row.
    ///
    /// ```
    /// use dense_linalg::Matrix;
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(m.shape().width, 2);
    /// assert_eq!(m[1][0], 3.0);
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        Self::from_rows_with_config(rows, LinalgConfig::default())
    }

    pub fn from_rows_with_config<R: AsRef<[f64]>>(rows: &[R], config: LinalgConfig) -> Result<Self> {
        let op = "from_rows";
        let first = rows.first().ok_or_else(|| LinalgError::InvalidShape {
            op,
            detail: "literal has no rows".to_string(),
        })?;
        let width = first.as_ref().len();
        for (idx, row) in rows.iter().enumerate() {
            let len = row.as_ref().len();
            if len != width {
                return Err(LinalgError::InvalidShape {
                    op,
                    detail: format!("row {} has {} columns, expected {}", idx, len, width),
                });
            }
        }
        let total = checked_len(op, width, rows.len())?;

        let mut data = Vec::with_capacity(total);
        for row in rows {
            data.extend_from_slice(row.as_ref());
        }
        Ok(Self::assemble(op, data, width, rows.len(), config.trace))
    }

    /// Wrap an existing row-major buffer.
    pub fn from_shape_vec(shape: Shape, data: Vec<f64>) -> Result<Self> {
        let op = "from_shape_vec";
        let total = checked_len(op, shape.width, shape.height)?;
        if data.len() != total {
            return Err(LinalgError::InvalidShape {
                op,
                detail: format!("{} needs {} values, got {}", shape, total, data.len()),
            });
        }
        Ok(Self::assemble(op, data, shape.width, shape.height, TraceLevel::Off))
    }

    /// Matrix of values drawn uniformly from `[-1, 1)`.
    pub fn random<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Result<Self> {
        let total = checked_len("random", width, height)?;
        let data = (0..total).map(|_| rng.gen_range(-1.0_f64..1.0)).collect();
        Ok(Self::assemble("random", data, width, height, TraceLevel::Off))
    }

    fn allocate(
        op: &'static str,
        width: usize,
        height: usize,
        value: f64,
        config: LinalgConfig,
    ) -> Result<Self> {
        let total = checked_len(op, width, height)?;
        Ok(Self::assemble(op, vec![value; total], width, height, config.trace))
    }

    fn assemble(op: &str, data: Vec<f64>, width: usize, height: usize, trace: TraceLevel) -> Self {
        let matrix = Matrix {
            data,
            width,
            height,
            trace,
        };
        matrix.trace_lifecycle(op);
        matrix
    }

    /// Move the buffer out in O(1), leaving `self` as the empty 0x0 matrix.
    pub fn take(&mut self) -> Matrix {
        let moved = Matrix {
            data: std::mem::take(&mut self.data),
            width: self.width,
            height: self.height,
            trace: self.trace,
        };
        self.width = 0;
        self.height = 0;
        moved.trace_lifecycle("move");
        moved
    }

    /// Consume the matrix and return its row-major buffer.
    pub fn into_vec(mut self) -> Vec<f64> {
        self.width = 0;
        self.height = 0;
        std::mem::take(&mut self.data)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.width, self.height)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True only for the moved-from state.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn config(&self) -> LinalgConfig {
        LinalgConfig::new(self.trace)
    }

    pub fn set_config(&mut self, config: LinalgConfig) {
        self.trace = config.trace;
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, f64> {
        self.data.iter_mut()
    }

    pub fn max(&self) -> Result<f64> {
        self.data
            .iter()
            .copied()
            .reduce(f64::max)
            .ok_or(LinalgError::EmptyOperand { op: "max" })
    }

    pub fn min(&self) -> Result<f64> {
        self.data
            .iter()
            .copied()
            .reduce(f64::min)
            .ok_or(LinalgError::EmptyOperand { op: "min" })
    }

    /// Same width and height, as elementwise operations require.
    pub fn is_conformable(&self, other: &Matrix) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// `self.width == other.height`, as `self * other` requires.
    pub fn is_chainable(&self, other: &Matrix) -> bool {
        self.width == other.height
    }

    pub fn transposed(&self) -> Matrix {
        let mut data = vec![0.0; self.data.len()];
        for (r, row) in self.data.chunks(self.width.max(1)).enumerate() {
            for (c, value) in row.iter().enumerate() {
                data[c * self.height + r] = *value;
            }
        }
        Self::assemble("transpose", data, self.height, self.width, self.trace)
    }

    /// Transpose in place. A single row or column keeps its buffer and only
    /// swaps width and height.
    pub fn transpose_in_place(&mut self) -> &mut Self {
        if self.width != 1 && self.height != 1 {
            let transposed = self.transposed();
            self.data = transposed.into_vec();
        }
        std::mem::swap(&mut self.width, &mut self.height);
        self
    }

    pub fn row(&self, row: usize) -> Result<Row<'_>> {
        let range = self.row_range(row)?;
        Ok(Row::new(row, &self.data[range]))
    }

    pub fn row_mut(&mut self, row: usize) -> Result<RowMut<'_>> {
        let range = self.row_range(row)?;
        Ok(RowMut::new(row, &mut self.data[range]))
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.data
            .chunks(self.width.max(1))
            .enumerate()
            .map(|(idx, row)| Row::new(idx, row))
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        let offset = self.offset(row, col)?;
        Ok(self.data[offset])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        let offset = self.offset(row, col)?;
        self.data[offset] = value;
        Ok(())
    }

    pub fn column(&self, col: usize) -> Result<Vec<f64>> {
        if col >= self.width {
            return Err(LinalgError::IndexOutOfRange {
                axis: "column",
                index: col,
                bound: self.width,
            });
        }
        Ok(self.rows().map(|row| row.as_slice()[col]).collect())
    }

    fn row_range(&self, row: usize) -> Result<std::ops::Range<usize>> {
        if row >= self.height {
            return Err(LinalgError::IndexOutOfRange {
                axis: "row",
                index: row,
                bound: self.height,
            });
        }
        let start = row * self.width;
        Ok(start..start + self.width)
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        let range = self.row_range(row)?;
        if col >= self.width {
            return Err(LinalgError::IndexOutOfRange {
                axis: "column",
                index: col,
                bound: self.width,
            });
        }
        Ok(range.start + col)
    }

    /// Set every element to `value`.
    pub fn assign_scalar(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Overwrite the contents from a literal of exactly the same shape.
    pub fn assign_rows<R: AsRef<[f64]>>(&mut self, rows: &[R]) -> Result<()> {
        let incoming = Shape::new(
            rows.first().map(|row| row.as_ref().len()).unwrap_or(0),
            rows.len(),
        );
        let ragged = rows.iter().any(|row| row.as_ref().len() != incoming.width);
        if ragged || incoming != self.shape() {
            return Err(LinalgError::ShapeMismatch {
                op: "assign_rows",
                lhs: self.shape(),
                rhs: incoming,
            });
        }
        for (dst, src) in self.data.chunks_mut(self.width.max(1)).zip(rows) {
            dst.copy_from_slice(src.as_ref());
        }
        Ok(())
    }

    /// Elementwise `+=`. Fails without touching `self` unless conformable.
    pub fn try_add_assign(&mut self, rhs: &Matrix) -> Result<()> {
        self.check_conformable("add", rhs)?;
        self.trace_operation("add", rhs.shape());
        for (lhs, rhs) in self.data.iter_mut().zip(&rhs.data) {
            *lhs += rhs;
        }
        Ok(())
    }

    /// Elementwise `-=`. Fails without touching `self` unless conformable.
    pub fn try_sub_assign(&mut self, rhs: &Matrix) -> Result<()> {
        self.check_conformable("sub", rhs)?;
        self.trace_operation("sub", rhs.shape());
        for (lhs, rhs) in self.data.iter_mut().zip(&rhs.data) {
            *lhs -= rhs;
        }
        Ok(())
    }

    /// Matrix product `self = self * rhs`.
    ///
    /// This is the only compound operation that can change the receiver's
    /// shape: the height stays, the width becomes `rhs.width()`.
    pub fn try_mul_assign(&mut self, rhs: &Matrix) -> Result<()> {
        if !self.is_chainable(rhs) {
            return Err(LinalgError::IncompatibleForProduct {
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        self.trace_operation("mul", rhs.shape());
        self.data = product(self, rhs);
        self.width = rhs.width;
        Ok(())
    }

    pub fn scale(&mut self, factor: f64) {
        if self.trace.operations() {
            log::trace!("scale {} matrix by {}", self.shape(), factor);
        }
        for value in self.data.iter_mut() {
            *value *= factor;
        }
    }

    /// `self + rhs` into a new matrix; neither operand changes.
    pub fn try_add(&self, rhs: &Matrix) -> Result<Matrix> {
        let mut out = self.clone();
        out.try_add_assign(rhs)?;
        Ok(out)
    }

    pub fn try_sub(&self, rhs: &Matrix) -> Result<Matrix> {
        let mut out = self.clone();
        out.try_sub_assign(rhs)?;
        Ok(out)
    }

    pub fn try_mul(&self, rhs: &Matrix) -> Result<Matrix> {
        let mut out = self.clone();
        out.try_mul_assign(rhs)?;
        Ok(out)
    }

    pub fn scaled(&self, factor: f64) -> Matrix {
        let mut out = self.clone();
        out.scale(factor);
        out
    }

    pub fn negated(&self) -> Matrix {
        let data = self.data.iter().map(|value| -value).collect();
        Self::assemble("negate", data, self.width, self.height, self.trace)
    }

    /// Same shape and every pair of elements within `tolerance`.
    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        self.is_conformable(other)
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    fn check_conformable(&self, op: &'static str, rhs: &Matrix) -> Result<()> {
        if self.is_conformable(rhs) {
            Ok(())
        } else {
            Err(LinalgError::ShapeMismatch {
                op,
                lhs: self.shape(),
                rhs: rhs.shape(),
            })
        }
    }

    fn trace_lifecycle(&self, event: &str) {
        if self.trace.lifecycle() {
            log::trace!("{} {} matrix", event, self.shape());
        }
    }

    fn trace_operation(&self, op: &str, rhs: Shape) {
        if self.trace.operations() {
            log::trace!("{} {} matrix with {}", op, self.shape(), rhs);
        }
    }
}

/// Free-function form of [`Matrix::is_conformable`].
pub fn conformable(a: &Matrix, b: &Matrix) -> bool {
    a.is_conformable(b)
}

/// Free-function form of [`Matrix::is_chainable`].
pub fn chainable(a: &Matrix, b: &Matrix) -> bool {
    a.is_chainable(b)
}

fn checked_len(op: &'static str, width: usize, height: usize) -> Result<usize> {
    if width < 1 || height < 1 {
        return Err(LinalgError::InvalidShape {
            op,
            detail: format!("width and height must be at least 1, got {}x{}", width, height),
        });
    }
    width
        .checked_mul(height)
        .ok_or_else(|| LinalgError::InvalidShape {
            op,
            detail: format!("{}x{} overflows the element count", width, height),
        })
}

fn product(lhs: &Matrix, rhs: &Matrix) -> Vec<f64> {
    let mut out = vec![0.0; lhs.height * rhs.width];
    for (lhs_row, out_row) in lhs
        .data
        .chunks(lhs.width.max(1))
        .zip(out.chunks_mut(rhs.width.max(1)))
    {
        for (r, a) in lhs_row.iter().enumerate() {
            let rhs_row = &rhs.data[r * rhs.width..(r + 1) * rhs.width];
            for (acc, b) in out_row.iter_mut().zip(rhs_row) {
                *acc += a * b;
            }
        }
    }
    out
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix {
            data: Vec::new(),
            width: 0,
            height: 0,
            trace: TraceLevel::Off,
        }
    }
}

impl Clone for Matrix {
    fn clone(&self) -> Self {
        let copy = Matrix {
            data: self.data.clone(),
            width: self.width,
            height: self.height,
            trace: self.trace,
        };
        copy.trace_lifecycle("copy");
        copy
    }
}

impl Drop for Matrix {
    fn drop(&mut self) {
        if !self.is_empty() {
            self.trace_lifecycle("release");
        }
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.data == other.data
    }
}

/// `m[r]` is the row slice, so `m[r][c]` reads one element.
///
/// Only the row bound panics with the [`LinalgError::IndexOutOfRange`]
/// message. The column is then indexed on a plain `[f64]` and panics with the
/// standard slice message. Use `m[(r, c)]` or [`Matrix::get`] to have both
/// bounds reported by this crate.
impl Index<usize> for Matrix {
    type Output = [f64];

    fn index(&self, row: usize) -> &Self::Output {
        match self.row(row) {
            Ok(view) => view.as_slice(),
            Err(err) => panic!("{}", err),
        }
    }
}

impl IndexMut<usize> for Matrix {
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        match self.row_mut(row) {
            Ok(view) => view.into_slice(),
            Err(err) => panic!("{}", err),
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        match self.offset(index.0, index.1) {
            Ok(offset) => &self.data[offset],
            Err(err) => panic!("{}", err),
        }
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        match self.offset(index.0, index.1) {
            Ok(offset) => &mut self.data[offset],
            Err(err) => panic!("{}", err),
        }
    }
}

/// `{{a, b}\n {c, d}}`, with the formatter's width, fill and precision
/// applied to every element.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("{}");
        }
        for (r, row) in self.rows().enumerate() {
            f.write_str(if r == 0 { "{{" } else { " {" })?;
            for (c, value) in row.iter().enumerate() {
                write_element(f, *value)?;
                if c + 1 < self.width {
                    f.write_str(", ")?;
                }
            }
            f.write_str(if r + 1 == self.height { "}}" } else { "}\n" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: &[&[f64]]) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn product_matches_hand_computation() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = m(&[&[5.0, 6.0], &[7.0, 8.0]]);
        let c = a.try_mul(&b).unwrap();
        assert_eq!(c, m(&[&[19.0, 22.0], &[43.0, 50.0]]));
    }

    #[test]
    fn product_changes_width_only() {
        let mut a = Matrix::filled(3, 2, 1.0).unwrap();
        let b = Matrix::filled(5, 3, 2.0).unwrap();
        a.try_mul_assign(&b).unwrap();
        assert_eq!(a.shape(), Shape::new(5, 2));
        assert!(a.iter().all(|v| *v == 6.0));
    }

    #[test]
    fn failed_add_leaves_receiver_untouched() {
        let mut a = m(&[&[1.0, 2.0]]);
        let b = m(&[&[1.0], &[2.0]]);
        let err = a.try_add_assign(&b).unwrap_err();
        assert!(matches!(err, LinalgError::ShapeMismatch { op: "add", .. }));
        assert_eq!(a, m(&[&[1.0, 2.0]]));
    }

    #[test]
    fn single_row_transpose_keeps_buffer() {
        let mut a = m(&[&[1.0, 2.0, 3.0]]);
        let before = a.as_slice().as_ptr();
        a.transpose_in_place();
        assert_eq!(a.shape(), Shape::new(1, 3));
        assert_eq!(a.as_slice().as_ptr(), before);
        assert_eq!(a.column(0).unwrap(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn take_leaves_sentinel() {
        let mut a = Matrix::square_filled(2, 7.0).unwrap();
        let moved = a.take();
        assert_eq!(a.shape(), Shape::new(0, 0));
        assert!(a.is_empty());
        assert_eq!(moved.len(), 4);
        assert!(matches!(a.max(), Err(LinalgError::EmptyOperand { op: "max" })));
        assert_eq!(format!("{}", a), "{}");
    }

    #[test]
    fn element_count_overflow_is_invalid_shape() {
        let err = Matrix::new(usize::MAX, 2).unwrap_err();
        assert!(matches!(err, LinalgError::InvalidShape { op: "new", .. }));
    }

    #[test]
    fn assign_rows_requires_identical_shape() {
        let mut a = Matrix::square(2).unwrap();
        a.assign_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(a[(1, 1)], 4.0);
        assert!(a.assign_rows(&[[1.0, 2.0, 3.0]]).is_err());
        assert_eq!(a[(0, 1)], 2.0);
    }
}
