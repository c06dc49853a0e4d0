//! Conversions to and from `ndarray::Array2<f64>`.

use ndarray::Array2;

use crate::error::LinalgError;
use crate::math::matrix::{Matrix, Shape};

impl From<&Matrix> for Array2<f64> {
    fn from(matrix: &Matrix) -> Self {
        Array2::from_shape_fn((matrix.height(), matrix.width()), |(r, c)| matrix[(r, c)])
    }
}

impl TryFrom<&Array2<f64>> for Matrix {
    type Error = LinalgError;

    fn try_from(array: &Array2<f64>) -> Result<Self, Self::Error> {
        let (rows, cols) = array.dim();
        Matrix::from_shape_vec(Shape::new(cols, rows), array.iter().copied().collect())
    }
}
