//! dense-linalg: small dense matrix and vector containers.
//!
//! This crate provides an owned row-major `Matrix` of `f64`, a `Vector`
//! that is a single-row matrix with geometry helpers (norm, normalization,
//! dot and cross products, angles), checked arithmetic with `std::ops`
//! operators layered on top, and `Display` output that honors the caller's
//! width, fill and precision.
//!
//! Shape violations are reported through [`LinalgError`]. The `try_*`
//! methods return them; the operators panic with the same message.
//! Lifecycle and arithmetic tracing goes through the `log` facade and is
//! switched on per value with [`LinalgConfig`].
pub mod config;
pub mod error;
pub mod math;

pub use config::{LinalgConfig, TraceLevel};
pub use error::{LinalgError, Result};
pub use math::{
    angle_degrees, chainable, conformable, cos_angle, cross, dot, sin_angle, Matrix, Row, RowMut,
    Shape, Vector,
};
