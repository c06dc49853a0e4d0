//! Error type shared by the matrix and vector containers.

use crate::math::Shape;

/// Errors raised by construction, indexing and arithmetic.
///
/// Every error is reported at the call that detects it. Nothing is retried and
/// in-place operations leave their receiver untouched when they fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LinalgError {
    /// Zero dimensions, an empty literal or a ragged literal.
    #[error("invalid shape in {op}: {detail}")]
    InvalidShape { op: &'static str, detail: String },

    /// Elementwise operands that do not share width and height.
    #[error("shape mismatch in {op}: {lhs} vs {rhs}")]
    ShapeMismatch {
        op: &'static str,
        lhs: Shape,
        rhs: Shape,
    },

    /// Product operands where the left width differs from the right height.
    #[error("incompatible shapes for product: {lhs} x {rhs}")]
    IncompatibleForProduct { lhs: Shape, rhs: Shape },

    /// Row, column or flat index past its bound.
    #[error("{axis} index {index} is out of range (bound {bound})")]
    IndexOutOfRange {
        axis: &'static str,
        index: usize,
        bound: usize,
    },

    /// Cross-product based geometry on a vector that is not 3-D.
    #[error("{op} requires 3-component vectors, got length {len}")]
    InvalidGeometryOperand { op: &'static str, len: usize },

    /// Division by a zero magnitude.
    #[error("division by zero magnitude in {op}")]
    DivideByZero { op: &'static str },

    /// A NaN or infinite component where a finite value is required.
    #[error("non-finite component in {op}")]
    NonFinite { op: &'static str },

    /// Reduction over a matrix with no elements (the moved-from state).
    #[error("{op} called on an empty matrix")]
    EmptyOperand { op: &'static str },
}

pub type Result<T> = std::result::Result<T, LinalgError>;
