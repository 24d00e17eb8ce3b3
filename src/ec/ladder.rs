//! Arbitrary-point ladder: builds a 16-entry window for an arbitrary base
//! point, then consumes the scalar left to right, four doublings and one
//! addition per nibble.

use crate::ec::context::CurveContext;
use crate::ec::kernel::{double, full_add, mix_add, AffineCoords, ProjectiveCoords};
use crate::ec::protected::ProtectedTable;
use crate::ec::window::WindowIter;
use crate::ec::workplace::Workplace;

const WINDOW_WIDTH: u8 = 4;
const WINDOW_ENTRIES: usize = 16;

/// `k · p`, via a per-call 16-entry window and a left-to-right fixed-width
/// ladder. `k` is big-endian; leading zero bytes are skipped once.
pub fn scalar_mul(
    ctx: &CurveContext,
    wp: &mut Workplace,
    p: &ProjectiveCoords,
    k: &[u8],
    seed: u64,
) -> ProjectiveCoords {
    let field = ctx.field();
    let table = build_window(ctx, wp, p, seed);

    let mut acc = ProjectiveCoords {
        x: field.zero(),
        y: field.one(),
        z: field.zero(),
    };

    let mut gathered = vec![field.zero(), field.zero(), field.zero()];
    for digit in WindowIter::init_lr(WINDOW_WIDTH, k) {
        table.gather(field, digit as usize, &mut gathered);
        let entry = ProjectiveCoords {
            x: gathered[0].clone(),
            y: gathered[1].clone(),
            z: gathered[2].clone(),
        };

        for _ in 0..WINDOW_WIDTH {
            acc = double(field, &ctx.b3, wp, &acc);
        }
        acc = full_add(field, &ctx.b3, wp, &acc, &entry);
    }

    acc
}

/// Builds `{O, P, 2P, ..., 15P}` and installs it into protected memory
/// under `ctx`'s seed.
fn build_window(
    ctx: &CurveContext,
    wp: &mut Workplace,
    p: &ProjectiveCoords,
    seed: u64,
) -> ProtectedTable {
    let field = ctx.field();
    let mut entries: Vec<ProjectiveCoords> = Vec::with_capacity(WINDOW_ENTRIES);
    entries.push(ProjectiveCoords {
        x: field.zero(),
        y: field.one(),
        z: field.zero(),
    });
    entries.push(p.clone());

    let affine_p = if field.is_one(&p.z) {
        Some(AffineCoords {
            x: p.x.clone(),
            y: p.y.clone(),
        })
    } else {
        None
    };

    for i in 2..WINDOW_ENTRIES {
        let prev = &entries[i - 1];
        let next = match &affine_p {
            Some(affine) => mix_add(field, &ctx.b3, wp, prev, affine),
            None => full_add(field, &ctx.b3, wp, prev, p),
        };
        entries.push(next);
    }

    let mut flat = Vec::with_capacity(WINDOW_ENTRIES * 3);
    for entry in &entries {
        flat.push(entry.x.clone());
        flat.push(entry.y.clone());
        flat.push(entry.z.clone());
    }

    ProtectedTable::scatter(flat, WINDOW_ENTRIES, 3, seed)
}
