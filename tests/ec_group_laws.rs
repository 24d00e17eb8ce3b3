//! Group-law sanity checks on a small toy short-Weierstrass curve
//! (`a = -3`, 1-byte field). Exercises the arbitrary-point kernels through
//! the public `Point` API; the NIST P-256 vectors live in
//! `ec_p256_vectors.rs`.

use std::cmp::Ordering;
use std::rc::Rc;

use ecc_ws::ec::{CurveContext, Point, PointError};

// y² = x³ − 3x + 3 (mod 97); (1, 1) is on this curve: 1 = 1 - 3 + 3.
const TOY_MODULUS: [u8; 1] = [97];
const TOY_B: [u8; 1] = [3];
const TOY_ORDER: [u8; 1] = [97];

fn toy_ctx() -> Rc<CurveContext> {
    Rc::new(CurveContext::new(&TOY_MODULUS, &TOY_B, &TOY_ORDER, 1, 0).unwrap())
}

fn base_point(ctx: &Rc<CurveContext>) -> Point {
    Point::new(&[1], &[1], 1, ctx).unwrap()
}

fn infinity(ctx: &Rc<CurveContext>) -> Point {
    Point::new(&[0], &[0], 1, ctx).unwrap()
}

fn assert_points_equal(a: &Point, b: &Point) {
    assert_eq!(a.cmp(b).unwrap(), Ordering::Equal);
}

#[test]
fn on_curve_point_constructs() {
    let ctx = toy_ctx();
    let p = base_point(&ctx);
    assert!(!p.is_pai());
}

#[test]
fn off_curve_point_is_rejected() {
    let ctx = toy_ctx();
    let err = Point::new(&[1], &[2], 1, &ctx).unwrap_err();
    assert_eq!(err, PointError::OffCurve);
}

#[test]
fn infinity_decodes_from_zero_zero() {
    let ctx = toy_ctx();
    let o = infinity(&ctx);
    assert!(o.is_pai());
}

#[test]
fn identity_law() {
    let ctx = toy_ctx();
    let p = base_point(&ctx);
    let o = infinity(&ctx);

    let sum = p.add(&o).unwrap();
    assert_points_equal(&sum, &p);

    let sum = o.add(&p).unwrap();
    assert_points_equal(&sum, &p);
}

#[test]
fn inverse_law() {
    let ctx = toy_ctx();
    let p = base_point(&ctx);
    let mut neg_p = p.clone();
    neg_p.negate();

    let sum = p.add(&neg_p).unwrap();
    assert!(sum.is_pai());

    // double negation returns the original point
    neg_p.negate();
    assert_points_equal(&neg_p, &p);
}

#[test]
fn doubling_matches_self_addition() {
    let ctx = toy_ctx();
    let p = base_point(&ctx);

    let mut doubled = p.clone();
    doubled.double();

    let added = p.add(&p).unwrap();
    assert_points_equal(&doubled, &added);
}

#[test]
fn commutative_law() {
    let ctx = toy_ctx();
    let p = base_point(&ctx);
    let mut q = p.clone();
    q.double();

    let pq = p.add(&q).unwrap();
    let qp = q.add(&p).unwrap();
    assert_points_equal(&pq, &qp);
}

#[test]
fn associative_law() {
    let ctx = toy_ctx();
    let p = base_point(&ctx);
    let mut q = p.clone();
    q.double();
    let mut r = p.clone();
    r.scalar(&[3], 1, 0).unwrap();

    let left = p.add(&q).unwrap().add(&r).unwrap();
    let right = p.add(&q.add(&r).unwrap()).unwrap();
    assert_points_equal(&left, &right);
}

#[test]
fn scalar_by_zero_is_infinity() {
    let ctx = toy_ctx();
    let mut p = base_point(&ctx);
    p.scalar(&[0], 1, 0).unwrap();
    assert!(p.is_pai());
}

#[test]
fn scalar_by_one_is_identity() {
    let ctx = toy_ctx();
    let base = base_point(&ctx);
    let mut p = base.clone();
    p.scalar(&[1], 1, 0).unwrap();
    assert_points_equal(&p, &base);
}

#[test]
fn scalar_by_two_matches_double() {
    let ctx = toy_ctx();
    let mut p = base_point(&ctx);
    let mut doubled = p.clone();
    doubled.double();
    p.scalar(&[2], 1, 0).unwrap();
    assert_points_equal(&p, &doubled);
}

#[test]
fn cross_context_add_is_rejected() {
    let ctx_a = toy_ctx();
    let ctx_b = toy_ctx();
    let p = base_point(&ctx_a);
    let q = base_point(&ctx_b);
    assert_eq!(p.add(&q).unwrap_err(), PointError::CurveMismatch);
    assert_eq!(p.cmp(&q).unwrap_err(), PointError::CurveMismatch);
}

#[test]
fn normalize_is_idempotent_on_affine_points() {
    let ctx = toy_ctx();
    let mut p = base_point(&ctx);
    p.normalize();
    let mut x = [0u8; 1];
    let mut y = [0u8; 1];
    p.get_xy(&mut x, &mut y).unwrap();
    assert_eq!(x, [1]);
    assert_eq!(y, [1]);
}

#[test]
fn get_xy_rejects_wrong_length_buffers() {
    let ctx = toy_ctx();
    let p = base_point(&ctx);
    let mut x = [0u8; 2];
    let mut y = [0u8; 1];
    assert_eq!(
        p.get_xy(&mut x, &mut y).unwrap_err(),
        PointError::NotEnoughData
    );
}
