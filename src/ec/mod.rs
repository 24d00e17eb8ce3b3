//! Constant-time scalar multiplication on short Weierstrass curves with
//! `a = -3`.
//!
//! Data flow: a [`context::CurveContext`] binds a modulus/`b`/order; a
//! [`point::Point`] is built on-curve against that context; `Point::scalar`
//! dispatches (via [`blind`]) to either the P-256 generator ladder
//! ([`p256`]) or the arbitrary-point ladder ([`ladder`]), both built from
//! the same [`kernel`] addition formulas over [`field`] elements.

mod blind;
mod context;
mod error;
mod field;
mod kernel;
mod ladder;
mod p256;
mod point;
mod protected;
mod window;
mod workplace;

pub use context::CurveContext;
pub use error::{CurveError, PointError, ScalarError};
pub use point::Point;
