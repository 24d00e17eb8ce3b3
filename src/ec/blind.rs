//! Top-level scalar-multiplication dispatcher: generator detection,
//! projective and scalar blinding, and routing to the arbitrary-point or
//! generator ladder.

use crate::ec::context::{CurveContext, CurveKind};
use crate::ec::error::ScalarError;
use crate::ec::field::{FieldContext, FieldElement};
use crate::ec::kernel::ProjectiveCoords;
use crate::ec::ladder;
use crate::ec::p256;
use crate::ec::workplace::Workplace;

/// `k · p` with blinding applied when `seed != 0`, routed through the
/// generator ladder when `p` is the context's P-256 generator.
pub fn dispatch_scalar_mul(
    ctx: &CurveContext,
    p: &ProjectiveCoords,
    k: &[u8],
    seed: u64,
) -> Result<ProjectiveCoords, ScalarError> {
    let field = ctx.field();
    let mut wp = Workplace::new(field);

    if ctx.kind() == CurveKind::P256 && is_generator_point(ctx, p) {
        return p256::scalar_mul_generator(ctx, &mut wp, k);
    }

    if seed == 0 {
        return Ok(ladder::scalar_mul(ctx, &mut wp, p, k, seed));
    }

    let r = expand_seed(field, seed);
    let blinded = ProjectiveCoords {
        x: field.mul(&p.x, &r, wp.scratch()),
        y: field.mul(&p.y, &r, wp.scratch()),
        z: field.mul(&p.z, &r, wp.scratch()),
    };

    let low32 = seed as u32;
    let k_blinded = blind_scalar(k, ctx.order_bytes(), low32);
    Ok(ladder::scalar_mul(ctx, &mut wp, &blinded, &k_blinded, seed))
}

/// Exact-equality check against the context's canonical generator,
/// compared in affine form (not raw Montgomery limbs — see `SPEC_FULL.md`
/// §5.7 for why).
fn is_generator_point(ctx: &CurveContext, p: &ProjectiveCoords) -> bool {
    let field = ctx.field();
    let Some(generator) = &ctx.generator else {
        return false;
    };
    if field.is_zero(&p.z) {
        return false;
    }

    let mut scratch = vec![0u64; field.mul_scratch_len()];
    let z_inv = field.inv(&p.z);
    let x = field.mul(&p.x, &z_inv, &mut scratch);
    let y = field.mul(&p.y, &z_inv, &mut scratch);
    field.is_equal(&x, &generator.x) && field.is_equal(&y, &generator.y)
}

/// Derives a non-zero field factor from `seed` for projective blinding.
/// `seed` is an opaque 64-bit value; its internal entropy quality is the
/// caller's responsibility (the "SCA seed source" is an external
/// collaborator here, as in the source design).
fn expand_seed(field: &FieldContext, seed: u64) -> FieldElement {
    let byte_len = field.byte_len();
    let mut counter: u64 = 0;
    loop {
        let candidate = seed ^ counter.wrapping_mul(0x9E37_79B9_7F4A_7C15);
        let bytes = splitmix_fill(candidate, byte_len);
        if let Ok(fe) = field.from_bytes(&bytes) {
            if !field.is_zero(&fe) {
                return fe;
            }
        }
        counter = counter.wrapping_add(1);
    }
}

fn splitmix_fill(seed: u64, len: usize) -> Vec<u8> {
    let mut state = seed;
    let mut out = Vec::with_capacity(len + 8);
    while out.len() < len {
        state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        out.extend_from_slice(&z.to_be_bytes());
    }
    out.truncate(len);
    out
}

/// `k + r·n`, both big-endian, widened by two 64-bit words beyond
/// `max(k.len(), n.len())` per the source design.
fn blind_scalar(k: &[u8], n: &[u8], r: u32) -> Vec<u8> {
    let width = k.len().max(n.len()) + 16;
    let rn = mul_small_be(n, r as u64);
    add_be(&resize_be(k, width), &resize_be(&rn, width))
}

fn mul_small_be(value: &[u8], multiplier: u64) -> Vec<u8> {
    let mut out = vec![0u8; value.len() + 8];
    let mut carry: u128 = 0;
    for (i, &byte) in value.iter().rev().enumerate() {
        let prod = byte as u128 * multiplier as u128 + carry;
        let idx = out.len() - 1 - i;
        out[idx] = (prod & 0xff) as u8;
        carry = prod >> 8;
    }
    let mut idx = out.len() - value.len();
    while carry > 0 && idx > 0 {
        idx -= 1;
        let sum = out[idx] as u128 + (carry & 0xff);
        out[idx] = (sum & 0xff) as u8;
        carry = (carry >> 8) + (sum >> 8);
    }
    out
}

fn add_be(a: &[u8], b: &[u8]) -> Vec<u8> {
    let len = a.len().max(b.len()) + 1;
    let mut out = vec![0u8; len];
    let mut carry: u16 = 0;
    for i in 0..len {
        let av = if i < a.len() { a[a.len() - 1 - i] as u16 } else { 0 };
        let bv = if i < b.len() { b[b.len() - 1 - i] as u16 } else { 0 };
        let sum = av + bv + carry;
        out[len - 1 - i] = (sum & 0xff) as u8;
        carry = sum >> 8;
    }
    out
}

fn resize_be(bytes: &[u8], width: usize) -> Vec<u8> {
    if bytes.len() == width {
        bytes.to_vec()
    } else if bytes.len() > width {
        bytes[bytes.len() - width..].to_vec()
    } else {
        let mut out = vec![0u8; width];
        out[width - bytes.len()..].copy_from_slice(bytes);
        out
    }
}
