//! Scoped scratch bundle for the addition kernels.
//!
//! A [`Workplace`] owns the eleven named field-element temporaries the
//! complete-addition formulas need (`a..k`) plus the scratch buffer
//! [`crate::ec::field::FieldContext::mul`] requires. It is built fresh at
//! the start of every scalar operation and dropped at the end of it —
//! Rust's ownership model is the direct replacement for the source
//! design's "created and destroyed around every scalar operation ...
//! never shared concurrently".

use crate::ec::field::{FieldContext, FieldElement};

/// Eleven named scratch slots plus a multiplication scratch buffer, sized
/// once for a given [`FieldContext`] and reused for every kernel call in a
/// scalar operation.
pub struct Workplace {
    pub a: FieldElement,
    pub b: FieldElement,
    pub c: FieldElement,
    pub d: FieldElement,
    pub e: FieldElement,
    pub f: FieldElement,
    pub g: FieldElement,
    pub h: FieldElement,
    pub i: FieldElement,
    pub j: FieldElement,
    pub k: FieldElement,
    scratch: Vec<u64>,
}

impl Workplace {
    /// Allocates a new, zeroed workplace sized for `ctx`.
    pub fn new(ctx: &FieldContext) -> Self {
        Workplace {
            a: ctx.zero(),
            b: ctx.zero(),
            c: ctx.zero(),
            d: ctx.zero(),
            e: ctx.zero(),
            f: ctx.zero(),
            g: ctx.zero(),
            h: ctx.zero(),
            i: ctx.zero(),
            j: ctx.zero(),
            k: ctx.zero(),
            scratch: vec![0u64; ctx.mul_scratch_len()],
        }
    }

    /// Scratch buffer for [`FieldContext::mul`] / [`FieldContext::square`].
    pub fn scratch(&mut self) -> &mut [u64] {
        &mut self.scratch
    }
}
