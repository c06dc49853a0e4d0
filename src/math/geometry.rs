//! Vector geometry: dot and cross products and the angle between vectors.
//!
//! `sin_angle` and `angle_degrees` go through the cross product and are
//! therefore only defined for 3-component vectors. Every angle helper reports
//! [`LinalgError::DivideByZero`] when either operand has zero magnitude, since
//! the angle is undefined there.

use crate::error::{LinalgError, Result};
use crate::math::vector::Vector;

/// Sum of componentwise products. Both vectors must have the same length.
pub fn dot(a: &Vector, b: &Vector) -> Result<f64> {
    if a.len() != b.len() {
        return Err(LinalgError::ShapeMismatch {
            op: "dot",
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x * y).sum())
}

/// 3-D cross product `a x b`.
///
/// ```
/// use dense_linalg::{cross, Vector};
/// let x = Vector::from_slice(&[1.0, 0.0, 0.0]).unwrap();
/// let y = Vector::from_slice(&[0.0, 1.0, 0.0]).unwrap();
/// assert_eq!(cross(&x, &y).unwrap().to_vec(), vec![0.0, 0.0, 1.0]);
/// ```
pub fn cross(a: &Vector, b: &Vector) -> Result<Vector> {
    let (a, b) = (as_triple("cross", a)?, as_triple("cross", b)?);
    Vector::from_vec(vec![
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ])
}

pub fn cos_angle(a: &Vector, b: &Vector) -> Result<f64> {
    let dot = dot(a, b)?;
    Ok(dot / magnitude_product("cos_angle", a, b)?)
}

pub fn sin_angle(a: &Vector, b: &Vector) -> Result<f64> {
    let cross = cross(a, b)?;
    Ok(cross.magnitude() / magnitude_product("sin_angle", a, b)?)
}

/// Angle in degrees, in `[0, 180]`.
///
/// Computed as `atan2(|a x b|, a . b)`, which stays accurate for nearly
/// parallel vectors where `acos` of the cosine loses precision.
pub fn angle_degrees(a: &Vector, b: &Vector) -> Result<f64> {
    let cross = cross(a, b)?;
    magnitude_product("angle_degrees", a, b)?;
    let dot = dot(a, b)?;
    Ok(cross.magnitude().atan2(dot).to_degrees())
}

fn as_triple<'a>(op: &'static str, v: &'a Vector) -> Result<&'a [f64]> {
    if v.len() != 3 {
        return Err(LinalgError::InvalidGeometryOperand { op, len: v.len() });
    }
    Ok(v.as_slice())
}

fn magnitude_product(op: &'static str, a: &Vector, b: &Vector) -> Result<f64> {
    let product = a.magnitude() * b.magnitude();
    if product == 0.0 {
        return Err(LinalgError::DivideByZero { op });
    }
    Ok(product)
}
