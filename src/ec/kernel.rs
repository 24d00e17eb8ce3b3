//! Complete-addition kernels for short Weierstrass curves with `a = -3`.
//!
//! `double`, `full_add` and `mix_add` implement the Renes–Costello–Batina
//! complete addition formulas specialised for `a = -3`. They are
//! constant-time across all point inputs including the identity and equal
//! points: the formulas never inspect a coordinate to decide which branch
//! of "add vs double vs identity" to take. `mix_add` keeps the one
//! documented exception (see below).
//!
//! All three work through [`FieldContext`] and a caller-owned
//! [`Workplace`], never allocating beyond what the field operations
//! themselves allocate.

use crate::ec::field::{FieldContext, FieldElement};
use crate::ec::workplace::Workplace;

/// A point in projective coordinates `(X : Y : Z)`. `Z = 0` is the point
/// at infinity.
#[derive(Clone)]
pub struct ProjectiveCoords {
    pub x: FieldElement,
    pub y: FieldElement,
    pub z: FieldElement,
}

/// A point in affine coordinates `(x, y)` (`Z` implicitly `1`). `(0, 0)` is
/// the encoded point at infinity.
#[derive(Clone)]
pub struct AffineCoords {
    pub x: FieldElement,
    pub y: FieldElement,
}

impl AffineCoords {
    /// `true` for the encoded point-at-infinity `(0, 0)`.
    pub fn is_pai(&self, ctx: &FieldContext) -> bool {
        ctx.is_zero(&self.x) && ctx.is_zero(&self.y)
    }
}

/// `2P`, 9 temporaries over workplace slots `a..i`.
pub fn double(
    ctx: &FieldContext,
    b3: &FieldElement,
    wp: &mut Workplace,
    p: &ProjectiveCoords,
) -> ProjectiveCoords {
    wp.a = ctx.square(&p.x, wp.scratch()); // t0 = X*X
    wp.b = ctx.square(&p.y, wp.scratch()); // t1 = Y*Y
    wp.c = ctx.square(&p.z, wp.scratch()); // t2 = Z*Z
    wp.d = ctx.mul(&p.x, &p.y, wp.scratch()); // t3 = X*Y
    wp.d = ctx.add(&wp.d, &wp.d); // t3 = t3+t3
    wp.e = ctx.mul(&p.y, &p.z, wp.scratch()); // t4 = Y*Z
    wp.f = ctx.mul(&p.x, &p.z, wp.scratch()); // t5 = X*Z
    wp.f = ctx.add(&wp.f, &wp.f); // t5 = t5+t5

    wp.i = ctx.neg(&ctx.mul_small(&wp.f, 3)); // Z3 = a*t5 (a=-3)
    wp.g = ctx.mul(b3, &wp.c, wp.scratch()); // X3 = b3*t2
    wp.i = ctx.add(&wp.g, &wp.i); // Z3 = X3+Z3
    wp.g = ctx.sub(&wp.b, &wp.i); // X3 = t1-Z3
    wp.i = ctx.add(&wp.b, &wp.i); // Z3 = t1+Z3
    wp.h = ctx.mul(&wp.g, &wp.i, wp.scratch()); // Y3 = X3*Z3
    wp.g = ctx.mul(&wp.d, &wp.g, wp.scratch()); // X3 = t3*X3
    wp.i = ctx.mul(b3, &wp.i, wp.scratch()); // Z3 = b3*Z3
    wp.c = ctx.neg(&ctx.mul_small(&wp.c, 3)); // t2 = a*t2
    wp.d = ctx.sub(&wp.a, &wp.c); // t3 = t0-t2
    wp.d = ctx.neg(&ctx.mul_small(&wp.d, 3)); // t3 = a*t3
    wp.d = ctx.add(&wp.d, &wp.i); // t3 = t3+Z3
    wp.i = ctx.add(&wp.a, &wp.a); // Z3 = t0+t0
    wp.a = ctx.add(&wp.i, &wp.a); // t0 = Z3+t0
    wp.a = ctx.add(&wp.a, &wp.c); // t0 = t0+t2
    wp.a = ctx.mul(&wp.a, &wp.d, wp.scratch()); // t0 = t0*t3
    wp.h = ctx.add(&wp.h, &wp.a); // Y3 = Y3+t0
    wp.e = ctx.add(&wp.e, &wp.e); // t4 = t4+t4 (t4 already Y*Z)
    wp.a = ctx.mul(&wp.e, &wp.d, wp.scratch()); // t0 = t4*t3
    wp.g = ctx.sub(&wp.g, &wp.a); // X3 = X3-t0
    wp.i = ctx.mul(&wp.e, &wp.b, wp.scratch()); // Z3 = t4*t1
    wp.i = ctx.add(&wp.i, &wp.i); // Z3 = Z3+Z3
    wp.i = ctx.add(&wp.i, &wp.i); // Z3 = Z3+Z3

    ProjectiveCoords {
        x: wp.g.clone(),
        y: wp.h.clone(),
        z: wp.i.clone(),
    }
}

/// `P1 + P2`, both projective. 9 temporaries over workplace slots `a..i`.
/// Uniform control flow across every input combination, including either
/// operand at infinity or `P1 == P2`.
pub fn full_add(
    ctx: &FieldContext,
    b3: &FieldElement,
    wp: &mut Workplace,
    p1: &ProjectiveCoords,
    p2: &ProjectiveCoords,
) -> ProjectiveCoords {
    wp.a = ctx.mul(&p1.x, &p2.x, wp.scratch()); // t0 = X1*X2
    wp.b = ctx.mul(&p1.y, &p2.y, wp.scratch()); // t1 = Y1*Y2
    wp.c = ctx.mul(&p1.z, &p2.z, wp.scratch()); // t2 = Z1*Z2
    wp.d = ctx.add(&p1.x, &p1.y); // t3 = X1+Y1
    wp.e = ctx.add(&p2.x, &p2.y); // t4 = X2+Y2
    wp.d = ctx.mul(&wp.d, &wp.e, wp.scratch()); // t3 = t3*t4
    wp.e = ctx.add(&wp.a, &wp.b); // t4 = t0+t1
    wp.d = ctx.sub(&wp.d, &wp.e); // t3 = t3-t4
    wp.e = ctx.add(&p1.x, &p1.z); // t4 = X1+Z1
    wp.f = ctx.add(&p2.x, &p2.z); // t5 = X2+Z2
    wp.e = ctx.mul(&wp.e, &wp.f, wp.scratch()); // t4 = t4*t5
    wp.f = ctx.add(&wp.a, &wp.c); // t5 = t0+t2
    wp.e = ctx.sub(&wp.e, &wp.f); // t4 = t4-t5
    wp.f = ctx.add(&p1.y, &p1.z); // t5 = Y1+Z1
    wp.g = ctx.add(&p2.y, &p2.z); // X3 = Y2+Z2
    wp.f = ctx.mul(&wp.f, &wp.g, wp.scratch()); // t5 = t5*X3
    wp.g = ctx.add(&wp.b, &wp.c); // X3 = t1+t2
    wp.f = ctx.sub(&wp.f, &wp.g); // t5 = t5-X3
    wp.i = ctx.neg(&ctx.mul_small(&wp.e, 3)); // Z3 = a*t4
    wp.g = ctx.mul(b3, &wp.c, wp.scratch()); // X3 = b3*t2
    wp.i = ctx.add(&wp.g, &wp.i); // Z3 = X3+Z3
    wp.g = ctx.sub(&wp.b, &wp.i); // X3 = t1-Z3
    wp.i = ctx.add(&wp.b, &wp.i); // Z3 = t1+Z3
    wp.h = ctx.mul(&wp.g, &wp.i, wp.scratch()); // Y3 = X3*Z3
    wp.b = ctx.add(&wp.a, &wp.a); // t1 = t0+t0
    wp.b = ctx.add(&wp.b, &wp.a); // t1 = t1+t0
    wp.c = ctx.neg(&ctx.mul_small(&wp.c, 3)); // t2 = a*t2
    wp.e = ctx.mul(b3, &wp.e, wp.scratch()); // t4 = b3*t4
    wp.b = ctx.add(&wp.b, &wp.c); // t1 = t1+t2
    wp.c = ctx.sub(&wp.a, &wp.c); // t2 = t0-t2
    wp.c = ctx.neg(&ctx.mul_small(&wp.c, 3)); // t2 = a*t2
    wp.e = ctx.add(&wp.e, &wp.c); // t4 = t4+t2
    wp.a = ctx.mul(&wp.b, &wp.e, wp.scratch()); // t0 = t1*t4
    wp.h = ctx.add(&wp.h, &wp.a); // Y3 = Y3+t0
    wp.a = ctx.mul(&wp.f, &wp.e, wp.scratch()); // t0 = t5*t4
    wp.g = ctx.mul(&wp.d, &wp.g, wp.scratch()); // X3 = t3*X3
    wp.g = ctx.sub(&wp.g, &wp.a); // X3 = X3-t0
    wp.a = ctx.mul(&wp.d, &wp.b, wp.scratch()); // t0 = t3*t1
    wp.i = ctx.mul(&wp.f, &wp.i, wp.scratch()); // Z3 = t5*Z3
    wp.i = ctx.add(&wp.i, &wp.a); // Z3 = Z3+t0

    ProjectiveCoords {
        x: wp.g.clone(),
        y: wp.h.clone(),
        z: wp.i.clone(),
    }
}

/// `P1 + P2` where `P2` is affine (`Z2` implicit `1`).
///
/// Contains the ladder's sole data-dependent branch: if `p2` is the
/// encoded point at infinity `(0, 0)`, this short-circuits to a copy of
/// `p1`. That branch is taken only for genuine table/generator entries
/// during the hot loop, never on secret-dependent data, so it does not
/// leak scalar bits.
///
/// Expressed here as `full_add` with `Z2` fixed to `1`; this keeps the
/// formula unconditionally correct without re-deriving a second,
/// independently-tuned mixed-coordinate formula.
pub fn mix_add(
    ctx: &FieldContext,
    b3: &FieldElement,
    wp: &mut Workplace,
    p1: &ProjectiveCoords,
    p2: &AffineCoords,
) -> ProjectiveCoords {
    if p2.is_pai(ctx) {
        return p1.clone();
    }
    let p2_proj = ProjectiveCoords {
        x: p2.x.clone(),
        y: p2.y.clone(),
        z: ctx.one(),
    };
    full_add(ctx, b3, wp, p1, &p2_proj)
}
