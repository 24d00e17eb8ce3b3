//! Public point type: on-curve construction, group operations and the
//! top-level scalar-multiplication entry point.

use std::cmp::Ordering;
use std::rc::Rc;

use crate::ec::blind::dispatch_scalar_mul;
use crate::ec::context::CurveContext;
use crate::ec::error::{PointError, ScalarError};
use crate::ec::kernel::{double as kernel_double, full_add, ProjectiveCoords};
use crate::ec::workplace::Workplace;

/// A point on the curve described by a shared [`CurveContext`].
///
/// Stored projectively. Operations that mutate `self` (`double`, `add`,
/// `normalize`, `negate`, `scalar`) take `&mut Point` — the borrow checker,
/// not a runtime convention, is what rules out concurrent mutation of the
/// same point.
#[derive(Clone)]
pub struct Point {
    coords: ProjectiveCoords,
    ctx: Rc<CurveContext>,
}

impl Point {
    /// Builds a point from affine coordinates. `(0, 0)` decodes to the
    /// point at infinity; any other pair must satisfy the curve equation
    /// `y² = x³ − 3x + b`.
    pub fn new(x: &[u8], y: &[u8], len: usize, ctx: &Rc<CurveContext>) -> Result<Self, PointError> {
        let field = ctx.field();
        if len == 0 || field.byte_len() != len {
            return Err(PointError::NotEnoughData);
        }
        if x.len() != len || y.len() != len {
            return Err(PointError::NotEnoughData);
        }

        let x_fe = field.from_bytes(x).map_err(|_| PointError::OffCurve)?;
        let y_fe = field.from_bytes(y).map_err(|_| PointError::OffCurve)?;

        if field.is_zero(&x_fe) && field.is_zero(&y_fe) {
            return Ok(Point {
                coords: ProjectiveCoords {
                    x: field.zero(),
                    y: field.one(),
                    z: field.zero(),
                },
                ctx: Rc::clone(ctx),
            });
        }

        let mut scratch = vec![0u64; field.mul_scratch_len()];
        let lhs = field.square(&y_fe, &mut scratch);
        let x2 = field.square(&x_fe, &mut scratch);
        let x3 = field.mul(&x2, &x_fe, &mut scratch);
        let three_x = field.mul_small(&x_fe, 3);
        let rhs = field.sub(&field.add(&x3, &ctx.b), &three_x);
        if !field.is_equal(&lhs, &rhs) {
            return Err(PointError::OffCurve);
        }

        Ok(Point {
            coords: ProjectiveCoords {
                x: x_fe,
                y: y_fe,
                z: field.one(),
            },
            ctx: Rc::clone(ctx),
        })
    }

    /// `2·self`.
    pub fn double(&mut self) {
        let field = self.ctx.field();
        let mut wp = Workplace::new(field);
        self.coords = kernel_double(field, &self.ctx.b3, &mut wp, &self.coords);
    }

    /// `self + other`. Fails with [`PointError::CurveMismatch`] if the two
    /// points were built from different contexts.
    pub fn add(&self, other: &Point) -> Result<Point, PointError> {
        if !Rc::ptr_eq(&self.ctx, &other.ctx) {
            return Err(PointError::CurveMismatch);
        }
        let field = self.ctx.field();
        let mut wp = Workplace::new(field);
        let coords = full_add(field, &self.ctx.b3, &mut wp, &self.coords, &other.coords);
        Ok(Point {
            coords,
            ctx: Rc::clone(&self.ctx),
        })
    }

    /// Rescales to `Z = 1` (or the canonical `(0, 1, 0)` if `self` is the
    /// point at infinity).
    pub fn normalize(&mut self) {
        let field = self.ctx.field();
        let is_pai = field.is_zero(&self.coords.z) as u64;

        let z_inv = field.inv(&self.coords.z);
        let mut scratch = vec![0u64; field.mul_scratch_len()];
        let x = field.mul(&self.coords.x, &z_inv, &mut scratch);
        let y = field.mul(&self.coords.y, &z_inv, &mut scratch);

        self.coords.x = field.select(is_pai, &x, &field.zero());
        self.coords.y = field.select(is_pai, &y, &field.one());
        self.coords.z = field.select(is_pai, &field.one(), &field.zero());
    }

    /// `true` iff `self` is the point at infinity.
    pub fn is_pai(&self) -> bool {
        self.ctx.field().is_zero(&self.coords.z)
    }

    /// `-self`: negates `Y` in place.
    pub fn negate(&mut self) {
        let field = self.ctx.field();
        self.coords.y = field.neg(&self.coords.y);
    }

    /// Compares two points for equality via cross-multiplication
    /// (`X1·Z2 == X2·Z1 ∧ Y1·Z2 == Y2·Z1`), with the point-at-infinity
    /// cases folded into the same boolean rather than branched around.
    /// Returns [`Ordering::Equal`] iff the points denote the same affine
    /// point (or both are the point at infinity); [`PointError::Value`]
    /// otherwise, since "not equal" has no real order to report.
    pub fn cmp(&self, other: &Point) -> Result<Ordering, PointError> {
        if !Rc::ptr_eq(&self.ctx, &other.ctx) {
            return Err(PointError::CurveMismatch);
        }
        let field = self.ctx.field();
        let mut scratch = vec![0u64; field.mul_scratch_len()];

        let lhs_x = field.mul(&self.coords.x, &other.coords.z, &mut scratch);
        let rhs_x = field.mul(&other.coords.x, &self.coords.z, &mut scratch);
        let lhs_y = field.mul(&self.coords.y, &other.coords.z, &mut scratch);
        let rhs_y = field.mul(&other.coords.y, &self.coords.z, &mut scratch);
        let affine_eq = field.is_equal(&lhs_x, &rhs_x) && field.is_equal(&lhs_y, &rhs_y);

        let self_pai = self.is_pai();
        let other_pai = other.is_pai();
        let equal = (self_pai && other_pai) || (!self_pai && !other_pai && affine_eq);

        if equal {
            Ok(Ordering::Equal)
        } else {
            Err(PointError::Value)
        }
    }

    /// Extracts affine coordinates. Both buffers must be exactly the
    /// field's canonical byte length; normalizes a scratch copy first so
    /// `self` is left untouched.
    pub fn get_xy(&self, x_out: &mut [u8], y_out: &mut [u8]) -> Result<(), PointError> {
        let field = self.ctx.field();
        let expected = field.byte_len();
        if x_out.len() != expected || y_out.len() != expected {
            return Err(PointError::NotEnoughData);
        }

        let mut normalized = self.clone();
        normalized.normalize();

        field
            .to_bytes(&normalized.coords.x, x_out)
            .map_err(|_| PointError::NotEnoughData)?;
        field
            .to_bytes(&normalized.coords.y, y_out)
            .map_err(|_| PointError::NotEnoughData)?;
        Ok(())
    }

    /// `self ← k · self`, via the blinded dispatcher (generator ladder for
    /// the context's P-256 generator, arbitrary-point ladder otherwise).
    pub fn scalar(&mut self, k: &[u8], len: usize, seed: u64) -> Result<(), ScalarError> {
        if len == 0 || k.len() != len {
            return Err(ScalarError::NotEnoughData);
        }
        self.coords = dispatch_scalar_mul(&self.ctx, &self.coords, k, seed)?;
        Ok(())
    }
}
