use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use std::slice::{Iter, IterMut};

use crate::config::LinalgConfig;
use crate::error::{LinalgError, Result};
use crate::math::format::write_element;
use crate::math::geometry;
use crate::math::matrix::{Matrix, Shape};
use crate::math::ops::or_panic;

/// Row vector: a [`Matrix`] whose height is always 1.
///
/// The vector owns exactly one matrix and delegates storage and arithmetic
/// to it, so [`Vector::as_matrix`] is always a valid `len` x 1 matrix view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vector {
    inner: Matrix,
}

impl Vector {
    /// Vector of `len` zeros.
    pub fn new(len: usize) -> Result<Self> {
        Self::filled(len, 0.0)
    }

    pub fn filled(len: usize, value: f64) -> Result<Self> {
        Self::filled_with_config(len, value, LinalgConfig::default())
    }

    pub fn filled_with_config(len: usize, value: f64, config: LinalgConfig) -> Result<Self> {
        Ok(Self {
            inner: Matrix::filled_with_config(len, 1, value, config)?,
        })
    }

    pub fn from_slice(values: &[f64]) -> Result<Self> {
        Self::from_vec(values.to_vec())
    }

    pub fn from_vec(values: Vec<f64>) -> Result<Self> {
        let len = values.len();
        let inner = Matrix::from_shape_vec(Shape::new(len, 1), values).map_err(|err| match err {
            LinalgError::InvalidShape { detail, .. } => LinalgError::InvalidShape {
                op: "from_vec",
                detail,
            },
            other => other,
        })?;
        Ok(Self { inner })
    }

    /// Move the buffer out, leaving `self` as the empty moved-from vector.
    pub fn take(&mut self) -> Vector {
        Vector {
            inner: self.inner.take(),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.width()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn shape(&self) -> Shape {
        self.inner.shape()
    }

    pub fn config(&self) -> LinalgConfig {
        self.inner.config()
    }

    pub fn set_config(&mut self, config: LinalgConfig) {
        self.inner.set_config(config)
    }

    pub fn as_matrix(&self) -> &Matrix {
        &self.inner
    }

    pub fn into_matrix(self) -> Matrix {
        self.inner
    }

    pub fn as_slice(&self) -> &[f64] {
        self.inner.as_slice()
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        self.inner.as_mut_slice()
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.inner.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, f64> {
        self.inner.iter_mut()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.as_slice().to_vec()
    }

    pub fn get(&self, index: usize) -> Result<f64> {
        self.as_slice()
            .get(index)
            .copied()
            .ok_or_else(|| out_of_range(index, self.len()))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut f64> {
        let bound = self.len();
        self.as_mut_slice()
            .get_mut(index)
            .ok_or_else(|| out_of_range(index, bound))
    }

    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    pub fn max(&self) -> Result<f64> {
        self.inner.max()
    }

    pub fn min(&self) -> Result<f64> {
        self.inner.min()
    }

    pub fn assign_scalar(&mut self, value: f64) {
        self.inner.assign_scalar(value)
    }

    /// The `len` x 1 column. No longer a row vector, so typed as a matrix.
    pub fn transposed(&self) -> Matrix {
        self.inner.transposed()
    }

    /// Euclidean norm.
    pub fn magnitude(&self) -> f64 {
        self.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// A zero vector has no direction and yields
    /// [`LinalgError::DivideByZero`] rather than a vector of NaNs.
    pub fn normalized(&self) -> Result<Vector> {
        let mut out = self.clone();
        out.normalize_in_place()?;
        Ok(out)
    }

    /// In-place form of [`Vector::normalized`].
    ///
    /// Components whose squares overflow are rescaled by the largest one
    /// first, so large finite vectors still come out with unit length. A NaN
    /// or infinite component yields [`LinalgError::NonFinite`].
    pub fn normalize_in_place(&mut self) -> Result<()> {
        if !self.iter().all(|x| x.is_finite()) {
            return Err(LinalgError::NonFinite { op: "normalize" });
        }
        let largest = self.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()));
        if largest == 0.0 {
            return Err(LinalgError::DivideByZero { op: "normalize" });
        }
        let mut magnitude = self.magnitude();
        if magnitude.is_infinite() {
            for value in self.iter_mut() {
                *value /= largest;
            }
            magnitude = self.magnitude();
        }
        for value in self.iter_mut() {
            *value /= magnitude;
        }
        Ok(())
    }

    pub fn dot(&self, other: &Vector) -> Result<f64> {
        geometry::dot(self, other)
    }

    pub fn cross(&self, other: &Vector) -> Result<Vector> {
        geometry::cross(self, other)
    }

    pub fn cos_angle(&self, other: &Vector) -> Result<f64> {
        geometry::cos_angle(self, other)
    }

    pub fn sin_angle(&self, other: &Vector) -> Result<f64> {
        geometry::sin_angle(self, other)
    }

    pub fn angle_degrees(&self, other: &Vector) -> Result<f64> {
        geometry::angle_degrees(self, other)
    }

    pub fn try_add_assign(&mut self, rhs: &Vector) -> Result<()> {
        self.inner.try_add_assign(&rhs.inner)
    }

    pub fn try_sub_assign(&mut self, rhs: &Vector) -> Result<()> {
        self.inner.try_sub_assign(&rhs.inner)
    }

    /// `+=` against a matrix view; the matrix must be `len` x 1.
    pub fn try_add_assign_matrix(&mut self, rhs: &Matrix) -> Result<()> {
        self.inner.try_add_assign(rhs)
    }

    pub fn try_sub_assign_matrix(&mut self, rhs: &Matrix) -> Result<()> {
        self.inner.try_sub_assign(rhs)
    }

    /// Row vector times matrix. A 1 x n by n x k product is still a row
    /// vector, so the receiver keeps its type and takes width k.
    pub fn try_mul_assign_matrix(&mut self, rhs: &Matrix) -> Result<()> {
        self.inner.try_mul_assign(rhs)
    }

    pub fn scale(&mut self, factor: f64) {
        self.inner.scale(factor)
    }

    pub fn try_add(&self, rhs: &Vector) -> Result<Vector> {
        let mut out = self.clone();
        out.try_add_assign(rhs)?;
        Ok(out)
    }

    pub fn try_sub(&self, rhs: &Vector) -> Result<Vector> {
        let mut out = self.clone();
        out.try_sub_assign(rhs)?;
        Ok(out)
    }

    pub fn try_add_matrix(&self, rhs: &Matrix) -> Result<Vector> {
        let mut out = self.clone();
        out.try_add_assign_matrix(rhs)?;
        Ok(out)
    }

    pub fn try_sub_matrix(&self, rhs: &Matrix) -> Result<Vector> {
        let mut out = self.clone();
        out.try_sub_assign_matrix(rhs)?;
        Ok(out)
    }

    pub fn try_mul_matrix(&self, rhs: &Matrix) -> Result<Vector> {
        let mut out = self.clone();
        out.try_mul_assign_matrix(rhs)?;
        Ok(out)
    }

    pub fn scaled(&self, factor: f64) -> Vector {
        let mut out = self.clone();
        out.scale(factor);
        out
    }
}

fn out_of_range(index: usize, bound: usize) -> LinalgError {
    LinalgError::IndexOutOfRange {
        axis: "element",
        index,
        bound,
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = LinalgError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Vector::from_vec(values)
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = LinalgError;

    fn try_from(values: &[f64]) -> Result<Self> {
        Vector::from_slice(values)
    }
}

/// Accepts a single row, or a single column whose shape is flipped.
impl TryFrom<Matrix> for Vector {
    type Error = LinalgError;

    fn try_from(mut matrix: Matrix) -> Result<Self> {
        let shape = matrix.shape();
        if shape.is_empty() || (shape.width != 1 && shape.height != 1) {
            return Err(LinalgError::InvalidShape {
                op: "into_vector",
                detail: format!("{} is neither a single row nor a single column", shape),
            });
        }
        if shape.height != 1 {
            matrix.transpose_in_place();
        }
        Ok(Vector { inner: matrix })
    }
}

impl From<Vector> for Matrix {
    fn from(vector: Vector) -> Self {
        vector.into_matrix()
    }
}

impl AsRef<Matrix> for Vector {
    fn as_ref(&self) -> &Matrix {
        &self.inner
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        match self.as_slice().get(index) {
            Some(value) => value,
            None => panic!("{}", out_of_range(index, self.len())),
        }
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        or_panic(self.get_mut(index))
    }
}

impl AddAssign<&Vector> for Vector {
    fn add_assign(&mut self, rhs: &Vector) {
        or_panic(self.try_add_assign(rhs))
    }
}

impl SubAssign<&Vector> for Vector {
    fn sub_assign(&mut self, rhs: &Vector) {
        or_panic(self.try_sub_assign(rhs))
    }
}

impl AddAssign<&Matrix> for Vector {
    fn add_assign(&mut self, rhs: &Matrix) {
        or_panic(self.try_add_assign_matrix(rhs))
    }
}

impl SubAssign<&Matrix> for Vector {
    fn sub_assign(&mut self, rhs: &Matrix) {
        or_panic(self.try_sub_assign_matrix(rhs))
    }
}

impl MulAssign<&Matrix> for Vector {
    fn mul_assign(&mut self, rhs: &Matrix) {
        or_panic(self.try_mul_assign_matrix(rhs))
    }
}

impl MulAssign<f64> for Vector {
    fn mul_assign(&mut self, rhs: f64) {
        self.scale(rhs)
    }
}

impl<'a, 'b> Add<&'b Vector> for &'a Vector {
    type Output = Vector;

    fn add(self, rhs: &'b Vector) -> Self::Output {
        or_panic(self.try_add(rhs))
    }
}

impl Add<&Vector> for Vector {
    type Output = Vector;

    fn add(mut self, rhs: &Vector) -> Self::Output {
        self += rhs;
        self
    }
}

impl<'a, 'b> Sub<&'b Vector> for &'a Vector {
    type Output = Vector;

    fn sub(self, rhs: &'b Vector) -> Self::Output {
        or_panic(self.try_sub(rhs))
    }
}

impl Sub<&Vector> for Vector {
    type Output = Vector;

    fn sub(mut self, rhs: &Vector) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<'a, 'b> Add<&'b Matrix> for &'a Vector {
    type Output = Vector;

    fn add(self, rhs: &'b Matrix) -> Self::Output {
        or_panic(self.try_add_matrix(rhs))
    }
}

impl<'a, 'b> Sub<&'b Matrix> for &'a Vector {
    type Output = Vector;

    fn sub(self, rhs: &'b Matrix) -> Self::Output {
        or_panic(self.try_sub_matrix(rhs))
    }
}

impl<'a, 'b> Mul<&'b Matrix> for &'a Vector {
    type Output = Vector;

    fn mul(self, rhs: &'b Matrix) -> Self::Output {
        or_panic(self.try_mul_matrix(rhs))
    }
}

// Matrix on the left: the result is only known to be a matrix.

impl<'a, 'b> Add<&'b Vector> for &'a Matrix {
    type Output = Matrix;

    fn add(self, rhs: &'b Vector) -> Self::Output {
        self + rhs.as_matrix()
    }
}

impl<'a, 'b> Sub<&'b Vector> for &'a Matrix {
    type Output = Matrix;

    fn sub(self, rhs: &'b Vector) -> Self::Output {
        self - rhs.as_matrix()
    }
}

impl<'a, 'b> Mul<&'b Vector> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &'b Vector) -> Self::Output {
        self * rhs.as_matrix()
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scaled(rhs)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(mut self, rhs: f64) -> Self::Output {
        self.scale(rhs);
        self
    }
}

impl Mul<&Vector> for f64 {
    type Output = Vector;

    fn mul(self, rhs: &Vector) -> Self::Output {
        rhs.scaled(self)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Self::Output {
        rhs * self
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        Vector {
            inner: self.inner.negated(),
        }
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        -&self
    }
}

/// `(c0, c1, c2)`, with the formatter's width, fill and precision applied to
/// every component.
impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (idx, value) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write_element(f, *value)?;
        }
        f.write_str(")")
    }
}
