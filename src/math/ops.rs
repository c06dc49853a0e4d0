//! `std::ops` impls for [`Matrix`].
//!
//! The operators delegate to the checked methods and panic with the error
//! message on a shape violation, the same way slice indexing panics. Use
//! `try_add`, `try_sub` and `try_mul` to handle the error instead.
//!
//! Operators taking `&Matrix` on the left allocate a new result and never
//! touch their operands. Operators taking an owned left operand reuse its
//! buffer.
//!
//! Row indexing `m[r]` follows the same rule for the row bound. The column in
//! `m[r][c]` is indexed on the row slice, so an out-of-range column gets the
//! standard slice panic instead.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::Result;
use crate::math::matrix::Matrix;

pub(crate) fn or_panic<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{}", err),
    }
}

impl AddAssign<&Matrix> for Matrix {
    fn add_assign(&mut self, rhs: &Matrix) {
        or_panic(self.try_add_assign(rhs))
    }
}

impl SubAssign<&Matrix> for Matrix {
    fn sub_assign(&mut self, rhs: &Matrix) {
        or_panic(self.try_sub_assign(rhs))
    }
}

impl MulAssign<&Matrix> for Matrix {
    fn mul_assign(&mut self, rhs: &Matrix) {
        or_panic(self.try_mul_assign(rhs))
    }
}

impl MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, rhs: f64) {
        self.scale(rhs)
    }
}

impl<'a, 'b> Add<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn add(self, rhs: &'b Matrix) -> Self::Output {
        or_panic(self.try_add(rhs))
    }
}

impl Add<&Matrix> for Matrix {
    type Output = Matrix;

    fn add(mut self, rhs: &Matrix) -> Self::Output {
        self += rhs;
        self
    }
}

impl Add<Matrix> for Matrix {
    type Output = Matrix;

    fn add(self, rhs: Matrix) -> Self::Output {
        self + &rhs
    }
}

impl<'a, 'b> Sub<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn sub(self, rhs: &'b Matrix) -> Self::Output {
        or_panic(self.try_sub(rhs))
    }
}

impl Sub<&Matrix> for Matrix {
    type Output = Matrix;

    fn sub(mut self, rhs: &Matrix) -> Self::Output {
        self -= rhs;
        self
    }
}

impl Sub<Matrix> for Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Matrix) -> Self::Output {
        self - &rhs
    }
}

impl<'a, 'b> Mul<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &'b Matrix) -> Self::Output {
        or_panic(self.try_mul(rhs))
    }
}

impl Mul<&Matrix> for Matrix {
    type Output = Matrix;

    fn mul(mut self, rhs: &Matrix) -> Self::Output {
        self *= rhs;
        self
    }
}

impl Mul<Matrix> for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Self::Output {
        self * &rhs
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scaled(rhs)
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(mut self, rhs: f64) -> Self::Output {
        self.scale(rhs);
        self
    }
}

impl Mul<&Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Self::Output {
        rhs.scaled(self)
    }
}

impl Mul<Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Self::Output {
        rhs * self
    }
}

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(mut self) -> Self::Output {
        self.scale(-1.0);
        self
    }
}
