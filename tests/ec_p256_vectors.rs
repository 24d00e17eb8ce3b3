//! NIST P-256 vectors, checked against an independent reference: plain
//! left-to-right double-and-add built directly from `Point::double` /
//! `Point::add`, which never touches either windowed ladder
//! (`ec::ladder::scalar_mul` or `ec::p256::scalar_mul_generator`). This
//! keeps the test from being circular with the code it's checking.

use std::cmp::Ordering;
use std::rc::Rc;

use ecc_ws::ec::{CurveContext, Point};

const P256_MODULUS: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
];

const P256_B: [u8; 32] = [
    0x5a, 0xc6, 0x35, 0xd8, 0xaa, 0x3a, 0x93, 0xe7, 0xb3, 0xeb, 0xbd, 0x55, 0x76, 0x98, 0x86, 0xbc,
    0x65, 0x1d, 0x06, 0xb0, 0xcc, 0x53, 0xb0, 0xf6, 0x3b, 0xce, 0x3c, 0x3e, 0x27, 0xd2, 0x60, 0x4b,
];

const P256_ORDER: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xbc, 0xe6, 0xfa, 0xad, 0xa7, 0x17, 0x9e, 0x84, 0xf3, 0xb9, 0xca, 0xc2, 0xfc, 0x63, 0x25, 0x51,
];

const P256_GX: [u8; 32] = [
    0x6b, 0x17, 0xd1, 0xf2, 0xe1, 0x2c, 0x42, 0x47, 0xf8, 0xbc, 0xe6, 0xe5, 0x63, 0xa4, 0x40, 0xf2,
    0x77, 0x03, 0x7d, 0x81, 0x2d, 0xeb, 0x33, 0xa0, 0xf4, 0xa1, 0x39, 0x45, 0xd8, 0x98, 0xc2, 0x96,
];

const P256_GY: [u8; 32] = [
    0x4f, 0xe3, 0x42, 0xe2, 0xfe, 0x1a, 0x7f, 0x9b, 0x8e, 0xe7, 0xeb, 0x4a, 0x7c, 0x0f, 0x9e, 0x16,
    0x2b, 0xce, 0x33, 0x57, 0x6b, 0x31, 0x5e, 0xce, 0xcb, 0xb6, 0x40, 0x68, 0x37, 0xbf, 0x51, 0xf5,
];

fn p256_ctx() -> Rc<CurveContext> {
    Rc::new(CurveContext::new(&P256_MODULUS, &P256_B, &P256_ORDER, 32, 0).unwrap())
}

fn generator(ctx: &Rc<CurveContext>) -> Point {
    Point::new(&P256_GX, &P256_GY, 32, ctx).unwrap()
}

/// Left-to-right double-and-add, bypassing both windowed ladders.
fn reference_scalar_mul(base: &Point, k: &[u8; 32]) -> Point {
    // acc starts at the point at infinity, built from the same context.
    let mut acc = base.clone();
    acc.scalar(&[0u8; 32], 32, 0).unwrap();

    for byte in k {
        for bit in (0..8).rev() {
            acc.double();
            if (byte >> bit) & 1 == 1 {
                acc = acc.add(base).unwrap();
            }
        }
    }
    acc
}

fn be32(value: u64) -> [u8; 32] {
    let mut out = [0u8; 32];
    out[24..].copy_from_slice(&value.to_be_bytes());
    out
}

#[test]
fn generator_ladder_matches_double_and_add() {
    let ctx = p256_ctx();
    let g = generator(&ctx);

    for &k in &[1u64, 2, 3, 5, 13, 255, 65536, 0xDEAD_BEEF_CAFE_u64] {
        let k_bytes = be32(k);
        let mut via_ladder = g.clone();
        via_ladder.scalar(&k_bytes, 32, 0).unwrap();

        let via_reference = reference_scalar_mul(&g, &k_bytes);
        assert_eq!(via_ladder.cmp(&via_reference).unwrap(), Ordering::Equal);
    }
}

#[test]
fn arbitrary_point_ladder_matches_double_and_add() {
    let ctx = p256_ctx();
    let g = generator(&ctx);
    let mut h = g.clone();
    h.double(); // H = 2G, not the context's generator constant

    for &k in &[1u64, 4, 7, 17, 1000, 0x1234_5678] {
        let k_bytes = be32(k);
        let mut via_ladder = h.clone();
        via_ladder.scalar(&k_bytes, 32, 0).unwrap();

        let via_reference = reference_scalar_mul(&h, &k_bytes);
        assert_eq!(via_ladder.cmp(&via_reference).unwrap(), Ordering::Equal);
    }
}

#[test]
fn generator_scalar_order_returns_to_infinity() {
    let ctx = p256_ctx();
    let mut g = generator(&ctx);
    g.scalar(&P256_ORDER, 32, 0).unwrap();
    assert!(g.is_pai());
}

#[test]
fn blinded_arbitrary_scalar_matches_unblinded() {
    let ctx = p256_ctx();
    let g = generator(&ctx);
    let mut h = g.clone();
    h.double(); // not the context's generator constant, so this takes ec::ladder

    let k = be32(123_456_789);

    let mut unblinded = h.clone();
    unblinded.scalar(&k, 32, 0).unwrap();

    let mut blinded = h.clone();
    blinded.scalar(&k, 32, 0x5EED_5EED_5EED_5EED).unwrap();

    assert_eq!(unblinded.cmp(&blinded).unwrap(), Ordering::Equal);
}
