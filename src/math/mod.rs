//! Dense `f64` containers.
//!
//! Provides `Matrix` (row-major 2D) and `Vector` (a matrix fixed to a single
//! row), borrowed row views for `m[row][col]` style access, and the 3-D
//! vector geometry helpers.
mod format;
pub mod geometry;
pub mod matrix;
mod ops;
pub mod row;
pub mod vector;

#[cfg(feature = "ndarray")]
mod interop;

pub use geometry::{angle_degrees, cos_angle, cross, dot, sin_angle};
pub use matrix::{chainable, conformable, Matrix, Shape};
pub use row::{Row, RowMut};
pub use vector::Vector;
