//! Montgomery-form prime field arithmetic.
//!
//! This is the crate's own narrow stand-in for an external bignum library:
//! it implements exactly the operations the curve engine needs (add, sub,
//! mul, Fermat inversion, byte codecs) for odd prime moduli of up to eight
//! 64-bit limbs (512 bits), using the CIOS Montgomery multiplication
//! algorithm. It does not attempt to be a general-purpose bignum crate.
//!
//! Field elements are stored as little-endian `u64` limb vectors and are
//! always kept in Montgomery form (`a·R mod p`) while live; conversion to
//! and from canonical big-endian bytes happens at the boundary
//! ([`FieldContext::from_bytes`] / [`FieldContext::to_bytes`]).

use crate::ec::error::CurveError;

/// Number of scratch words [`FieldContext::mul`] needs per call.
const MUL_SCRATCH_EXTRA: usize = 2;

/// Binds the modulus `p` and its Montgomery constants.
///
/// Immutable after construction; shared (via the owning
/// [`super::context::CurveContext`]) across every point and workplace built
/// against it.
#[derive(Clone)]
pub struct FieldContext {
    limbs: usize,
    byte_len: usize,
    modulus: Vec<u64>,
    r_mod_p: Vec<u64>,
    r2_mod_p: Vec<u64>,
    n0_inv: u64,
}

/// An element of the field bound by a [`FieldContext`], stored in
/// Montgomery form.
///
/// Opaque: callers never see the limbs directly. `Clone` gives the "copy on
/// clone", and moving a `FieldElement` out of a function is the idiomatic
/// replacement for the source design's "move on return".
#[derive(Clone)]
pub struct FieldElement {
    limbs: Vec<u64>,
}

impl FieldElement {
    fn with_limbs(limbs: Vec<u64>) -> Self {
        FieldElement { limbs }
    }
}

impl FieldContext {
    /// Builds a field context from a big-endian modulus.
    ///
    /// `modulus` must be odd (prime moduli always are) and non-empty; its
    /// byte length becomes the field's canonical encoding length.
    pub fn new(modulus: &[u8]) -> Result<Self, CurveError> {
        if modulus.is_empty() {
            return Err(CurveError::NotEnoughData);
        }
        if modulus[modulus.len() - 1] & 1 == 0 {
            return Err(CurveError::Value);
        }

        let byte_len = modulus.len();
        let limbs = byte_len.div_ceil(8);
        if limbs > 8 {
            return Err(CurveError::Value);
        }

        let modulus_limbs = be_bytes_to_limbs(modulus, limbs);
        let r_mod_p = compute_r_mod_p(&modulus_limbs, limbs);
        let mut r2_mod_p = r_mod_p.clone();
        for _ in 0..(64 * limbs) {
            r2_mod_p = shl1_mod(&r2_mod_p, &modulus_limbs);
        }
        let n0_inv = neg_inv_mod_2_64(modulus_limbs[0]);

        Ok(FieldContext {
            limbs,
            byte_len,
            modulus: modulus_limbs,
            r_mod_p,
            r2_mod_p,
            n0_inv,
        })
    }

    /// Number of 64-bit limbs used to represent an element.
    pub fn limbs(&self) -> usize {
        self.limbs
    }

    /// Canonical big-endian encoding length of an element, in bytes.
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// Scratch words required by [`FieldContext::mul`]. Sized once and
    /// reused by [`super::workplace::Workplace`] for every multiplication
    /// in a scalar operation (`SCRATCHPAD_NR` in the source design).
    pub fn mul_scratch_len(&self) -> usize {
        self.limbs + MUL_SCRATCH_EXTRA
    }

    /// The additive identity, `0`.
    pub fn zero(&self) -> FieldElement {
        FieldElement::with_limbs(vec![0u64; self.limbs])
    }

    /// The multiplicative identity, `1`, in Montgomery form.
    pub fn one(&self) -> FieldElement {
        FieldElement::with_limbs(self.r_mod_p.clone())
    }

    /// Builds a field element from a small public integer.
    pub fn set_small(&self, value: u64) -> FieldElement {
        let mut canonical = vec![0u64; self.limbs];
        canonical[0] = value;
        FieldElement::with_limbs(mont_mul(
            &canonical,
            &self.r2_mod_p,
            &self.modulus,
            self.n0_inv,
        ))
    }

    /// Decodes a canonical big-endian element and converts it to
    /// Montgomery form. `(0,0)`-style all-zero inputs decode to the field
    /// zero without error; range reduction is the caller's job via
    /// on-curve checks, not this codec.
    pub fn from_bytes(&self, bytes: &[u8]) -> Result<FieldElement, CurveError> {
        if bytes.len() != self.byte_len {
            return Err(CurveError::NotEnoughData);
        }
        let canonical = be_bytes_to_limbs(bytes, self.limbs);
        if !less_than(&canonical, &self.modulus) {
            return Err(CurveError::Value);
        }
        Ok(FieldElement::with_limbs(mont_mul(
            &canonical,
            &self.r2_mod_p,
            &self.modulus,
            self.n0_inv,
        )))
    }

    /// Encodes an element back to canonical big-endian bytes.
    pub fn to_bytes(&self, element: &FieldElement, out: &mut [u8]) -> Result<(), CurveError> {
        if out.len() != self.byte_len {
            return Err(CurveError::NotEnoughData);
        }
        let mut one = vec![0u64; self.limbs];
        one[0] = 1;
        let canonical = mont_mul(&element.limbs, &one, &self.modulus, self.n0_inv);
        limbs_to_be_bytes(&canonical, out);
        Ok(())
    }

    /// `a + b mod p`.
    pub fn add(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        let mut sum = vec![0u64; self.limbs];
        let mut carry: u128 = 0;
        for i in 0..self.limbs {
            let s = a.limbs[i] as u128 + b.limbs[i] as u128 + carry;
            sum[i] = s as u64;
            carry = s >> 64;
        }
        if carry != 0 {
            // a + b overflowed the limb width: the true value is
            // 2^(64*limbs) + sum, which exceeds the modulus (< 2^(64*limbs))
            // by less than one more modulus, so a single subtraction
            // (ignoring the now-cancelled overflow bit) reduces it.
            let mut borrow: u128 = 0;
            for i in 0..self.limbs {
                let (d, bout) = sub_borrow(sum[i], self.modulus[i], borrow as u64);
                sum[i] = d;
                borrow = bout as u128;
            }
        } else {
            reduce_once(&mut sum, &self.modulus);
        }
        FieldElement::with_limbs(sum)
    }

    /// `a - b mod p`.
    pub fn sub(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        let mut diff = vec![0u64; self.limbs];
        let mut borrow: u128 = 0;
        for i in 0..self.limbs {
            let (d, bout) = sub_borrow(a.limbs[i], b.limbs[i], borrow as u64);
            diff[i] = d;
            borrow = bout as u128;
        }
        if borrow != 0 {
            let mut carry: u128 = 0;
            for i in 0..self.limbs {
                let s = diff[i] as u128 + self.modulus[i] as u128 + carry;
                diff[i] = s as u64;
                carry = s >> 64;
            }
        }
        FieldElement::with_limbs(diff)
    }

    /// `-a mod p`.
    pub fn neg(&self, a: &FieldElement) -> FieldElement {
        self.sub(&self.zero(), a)
    }

    /// `a * b mod p`, with the caller supplying scratch space sized by
    /// [`FieldContext::mul_scratch_len`].
    pub fn mul(&self, a: &FieldElement, b: &FieldElement, scratch: &mut [u64]) -> FieldElement {
        debug_assert!(scratch.len() >= self.mul_scratch_len());
        let out = mont_mul_scratch(&a.limbs, &b.limbs, &self.modulus, self.n0_inv, scratch);
        FieldElement::with_limbs(out)
    }

    /// `a * a mod p`.
    pub fn square(&self, a: &FieldElement, scratch: &mut [u64]) -> FieldElement {
        self.mul(a, a, scratch)
    }

    /// Multiplies `a` by the small public constant `c` (e.g. `3` for `3b`).
    pub fn mul_small(&self, a: &FieldElement, c: u64) -> FieldElement {
        let mut acc = self.zero();
        let mut addend = a.clone();
        let mut k = c;
        while k > 0 {
            if k & 1 == 1 {
                acc = self.add(&acc, &addend);
            }
            addend = self.add(&addend, &addend);
            k >>= 1;
        }
        acc
    }

    /// Fermat inversion, `a^(p-2) mod p`, returning `0` when `a == 0`.
    ///
    /// The exponent `p - 2` is a public curve constant, so the
    /// square-and-multiply loop branching on its bits is not a
    /// side-channel concern.
    pub fn inv(&self, a: &FieldElement) -> FieldElement {
        let mut exponent = self.modulus.clone();
        sub_small_limbs(&mut exponent, 2);

        let mut scratch = vec![0u64; self.mul_scratch_len()];
        let mut result = self.one();
        for limb_idx in (0..self.limbs).rev() {
            let limb = exponent[limb_idx];
            for bit in (0..64).rev() {
                result = self.square(&result, &mut scratch);
                if (limb >> bit) & 1 == 1 {
                    result = self.mul(&result, a, &mut scratch);
                }
            }
        }
        result
    }

    /// `a == 0`.
    pub fn is_zero(&self, a: &FieldElement) -> bool {
        a.limbs.iter().all(|&w| w == 0)
    }

    /// `a == 1` (Montgomery form of `1`).
    pub fn is_one(&self, a: &FieldElement) -> bool {
        a.limbs == self.r_mod_p
    }

    /// `a == b`.
    pub fn is_equal(&self, a: &FieldElement, b: &FieldElement) -> bool {
        a.limbs
            .iter()
            .zip(b.limbs.iter())
            .fold(0u64, |acc, (&x, &y)| acc | (x ^ y))
            == 0
    }

    /// Copies `src` into `dst` in place (avoids an allocation at call sites
    /// that already own a slot, e.g. [`super::workplace::Workplace`]).
    pub fn copy_from(&self, dst: &mut FieldElement, src: &FieldElement) {
        dst.limbs.copy_from_slice(&src.limbs);
    }

    /// Constant-time selection: returns `a` if `choice` is `0`, `b` if
    /// `choice` is `1`. `choice` must be exactly `0` or `1`.
    pub fn select(&self, choice: u64, a: &FieldElement, b: &FieldElement) -> FieldElement {
        let mask = 0u64.wrapping_sub(choice);
        let limbs = a
            .limbs
            .iter()
            .zip(b.limbs.iter())
            .map(|(&x, &y)| (x & !mask) | (y & mask))
            .collect();
        FieldElement::with_limbs(limbs)
    }
}

fn reduce_once(value: &mut [u64], modulus: &[u64]) {
    if !less_than(value, modulus) {
        let mut borrow: u128 = 0;
        for i in 0..value.len() {
            let (d, b) = sub_borrow(value[i], modulus[i], borrow as u64);
            value[i] = d;
            borrow = b as u128;
        }
    }
}

fn less_than(a: &[u64], b: &[u64]) -> bool {
    for i in (0..a.len()).rev() {
        if a[i] != b[i] {
            return a[i] < b[i];
        }
    }
    false
}

fn sub_borrow(a: u64, b: u64, borrow_in: u64) -> (u64, u64) {
    let (d1, b1) = a.overflowing_sub(b);
    let (d2, b2) = d1.overflowing_sub(borrow_in);
    (d2, (b1 as u64) | (b2 as u64))
}

fn sub_small_limbs(value: &mut [u64], mut small: u64) {
    for limb in value.iter_mut() {
        let (d, borrow) = limb.overflowing_sub(small);
        *limb = d;
        small = borrow as u64;
        if small == 0 {
            break;
        }
    }
}

/// One step of `value = (2 * value) mod p`, used only at context
/// construction to derive the Montgomery constants `R mod p` / `R^2 mod p`.
fn shl1_mod(value: &[u64], modulus: &[u64]) -> Vec<u64> {
    let n = value.len();
    let mut out = vec![0u64; n];
    let mut carry = 0u64;
    for i in 0..n {
        out[i] = (value[i] << 1) | carry;
        carry = value[i] >> 63;
    }
    if carry != 0 || !less_than(&out, modulus) {
        let mut borrow: u128 = 0;
        for i in 0..n {
            let (d, b) = sub_borrow(out[i], modulus[i], borrow as u64);
            out[i] = d;
            borrow = b as u128;
        }
    }
    out
}

fn compute_r_mod_p(modulus: &[u64], limbs: usize) -> Vec<u64> {
    let mut value = vec![0u64; limbs];
    value[0] = 1;
    for _ in 0..(64 * limbs) {
        value = shl1_mod(&value, modulus);
    }
    value
}

/// `-(modulus[0])^{-1} mod 2^64`, via Newton–Raphson iteration (doubles the
/// number of correct bits each step; six steps take one correct bit to 64).
fn neg_inv_mod_2_64(n0: u64) -> u64 {
    let mut inv = 1u64;
    for _ in 0..6 {
        inv = inv.wrapping_mul(2u64.wrapping_sub(n0.wrapping_mul(inv)));
    }
    inv.wrapping_neg()
}

/// CIOS Montgomery multiplication, allocating its own scratch buffer.
/// Used only at context-construction time, where allocation cost does not
/// matter; the hot-path version is [`mont_mul_scratch`].
fn mont_mul(a: &[u64], b: &[u64], modulus: &[u64], n0_inv: u64) -> Vec<u64> {
    let n = a.len();
    let mut scratch = vec![0u64; n + MUL_SCRATCH_EXTRA];
    mont_mul_scratch(a, b, modulus, n0_inv, &mut scratch)
}

/// CIOS (coarsely integrated operand scanning) Montgomery multiplication.
///
/// Computes `a * b * R^-1 mod p` where `R = 2^(64 * n)`. `scratch` must
/// have length `n + 2`; it is used as the running accumulator `t` and is
/// left in an unspecified state afterward.
fn mont_mul_scratch(a: &[u64], b: &[u64], modulus: &[u64], n0_inv: u64, scratch: &mut [u64]) -> Vec<u64> {
    let n = a.len();
    let t = scratch;
    for slot in t.iter_mut() {
        *slot = 0;
    }

    for i in 0..n {
        let mut carry: u128 = 0;
        for j in 0..n {
            let sum = t[j] as u128 + a[i] as u128 * b[j] as u128 + carry;
            t[j] = sum as u64;
            carry = sum >> 64;
        }
        let sum = t[n] as u128 + carry;
        t[n] = sum as u64;
        t[n + 1] = t[n + 1].wrapping_add((sum >> 64) as u64);

        let m = t[0].wrapping_mul(n0_inv);
        let mut carry: u128 = (m as u128 * modulus[0] as u128 + t[0] as u128) >> 64;
        for j in 1..n {
            let sum = t[j] as u128 + m as u128 * modulus[j] as u128 + carry;
            t[j - 1] = sum as u64;
            carry = sum >> 64;
        }
        let sum = t[n] as u128 + carry;
        t[n - 1] = sum as u64;
        t[n] = t[n + 1].wrapping_add((sum >> 64) as u64);
        t[n + 1] = 0;
    }

    let mut result = t[..n].to_vec();
    if t[n] != 0 {
        // t overflowed n limbs: the true value is t[n]*2^(64n) + result,
        // which exceeds the modulus (< 2^(64n)) by less than one more
        // modulus, so a single subtraction (discarding the overflow limb)
        // reduces it.
        let mut borrow: u128 = 0;
        for j in 0..n {
            let (d, bout) = sub_borrow(result[j], modulus[j], borrow as u64);
            result[j] = d;
            borrow = bout as u128;
        }
    } else {
        reduce_once(&mut result, modulus);
    }
    result
}

fn be_bytes_to_limbs(bytes: &[u8], limbs: usize) -> Vec<u64> {
    let mut out = vec![0u64; limbs];
    for (i, byte) in bytes.iter().rev().enumerate() {
        out[i / 8] |= (*byte as u64) << ((i % 8) * 8);
    }
    out
}

fn limbs_to_be_bytes(limbs: &[u64], out: &mut [u8]) {
    for (i, byte) in out.iter_mut().rev().enumerate() {
        *byte = (limbs[i / 8] >> ((i % 8) * 8)) as u8;
    }
}
