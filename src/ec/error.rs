//! Error taxonomy for the elliptic-curve engine.
//!
//! Mirrors the error kinds of the source design (null, not-enough-data,
//! value, memory, ec-point, ec-curve) with one enum per fallible surface.
//! There is no "null" variant: Rust has no null pointers here, and a
//! failed constructor simply never produces a value.

use core::fmt;

/// Errors raised while building a [`super::context::CurveContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveError {
    /// `len` was zero, or a supplied buffer was shorter than `len`.
    NotEnoughData,
    /// A numeric input was out of its valid range (e.g. an even modulus).
    Value,
    /// Allocation failed while building the context or its tables.
    Memory,
}

/// Errors raised while constructing or comparing [`super::point::Point`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointError {
    /// Input buffer shorter than the field's byte length.
    NotEnoughData,
    /// Affine coordinates do not satisfy the curve equation and are not `(0, 0)`.
    OffCurve,
    /// The two points were built from different curve contexts.
    CurveMismatch,
    /// `cmp` found the two points unequal (the source taxonomy's
    /// value-error signal for "not equal", not a genuine ordering).
    Value,
    /// Allocation failed while building the point.
    Memory,
}

/// Errors raised by [`super::point::Point::scalar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarError {
    /// `len` was zero.
    NotEnoughData,
    /// The scalar required more windows than the generator table provides.
    Value,
    /// Allocation failed while building ladder state.
    Memory,
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveError::NotEnoughData => write!(f, "not enough data"),
            CurveError::Value => write!(f, "invalid value"),
            CurveError::Memory => write!(f, "allocation failure"),
        }
    }
}

impl fmt::Display for PointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointError::NotEnoughData => write!(f, "not enough data"),
            PointError::OffCurve => write!(f, "point is not on the curve"),
            PointError::CurveMismatch => write!(f, "points belong to different curves"),
            PointError::Value => write!(f, "points are not equal"),
            PointError::Memory => write!(f, "allocation failure"),
        }
    }
}

impl fmt::Display for ScalarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarError::NotEnoughData => write!(f, "not enough data"),
            ScalarError::Value => write!(f, "invalid value"),
            ScalarError::Memory => write!(f, "allocation failure"),
        }
    }
}

impl std::error::Error for CurveError {}
impl std::error::Error for PointError {}
impl std::error::Error for ScalarError {}
