//! NIST P-256 constants and the precomputed generator multi-table.
//!
//! The source design treats the generator table as an external, build-time
//! data blob. This crate cannot ship a binary asset, so it builds the
//! equivalent table once per process (via [`std::sync::OnceLock`]) from the
//! standard P-256 domain parameters, using the same `double`/`full_add`
//! kernels the rest of the engine uses — the "build step" simply runs at
//! first use instead of at compile time.

use std::sync::OnceLock;

use crate::ec::context::CurveContext;
use crate::ec::error::ScalarError;
use crate::ec::field::FieldContext;
use crate::ec::kernel::{double, full_add, mix_add, AffineCoords, ProjectiveCoords};
use crate::ec::window::WindowIter;
use crate::ec::workplace::Workplace;

/// Window width used by the generator ladder.
pub const P256_WINDOW_SIZE: u8 = 4;
/// Number of sub-tables (`ceil(256 / P256_WINDOW_SIZE)`).
pub const P256_N_TABLES: usize = 64;
/// Entries per sub-table (`2^P256_WINDOW_SIZE`).
pub const P256_POINTS_PER_TABLE: usize = 16;

pub const P256_MODULUS: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
];

pub const P256_B: [u8; 32] = [
    0x5a, 0xc6, 0x35, 0xd8, 0xaa, 0x3a, 0x93, 0xe7, 0xb3, 0xeb, 0xbd, 0x55, 0x76, 0x98, 0x86, 0xbc,
    0x65, 0x1d, 0x06, 0xb0, 0xcc, 0x53, 0xb0, 0xf6, 0x3b, 0xce, 0x3c, 0x3e, 0x27, 0xd2, 0x60, 0x4b,
];

pub const P256_ORDER: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xbc, 0xe6, 0xfa, 0xad, 0xa7, 0x17, 0x9e, 0x84, 0xf3, 0xb9, 0xca, 0xc2, 0xfc, 0x63, 0x25, 0x51,
];

pub const P256_GX: [u8; 32] = [
    0x6b, 0x17, 0xd1, 0xf2, 0xe1, 0x2c, 0x42, 0x47, 0xf8, 0xbc, 0xe6, 0xe5, 0x63, 0xa4, 0x40, 0xf2,
    0x77, 0x03, 0x7d, 0x81, 0x2d, 0xeb, 0x33, 0xa0, 0xf4, 0xa1, 0x39, 0x45, 0xd8, 0x98, 0xc2, 0x96,
];

pub const P256_GY: [u8; 32] = [
    0x4f, 0xe3, 0x42, 0xe2, 0xfe, 0x1a, 0x7f, 0x9b, 0x8e, 0xe7, 0xeb, 0x4a, 0x7c, 0x0f, 0x9e, 0x16,
    0x2b, 0xce, 0x33, 0x57, 0x6b, 0x31, 0x5e, 0xce, 0xcb, 0xb6, 0x40, 0x68, 0x37, 0xbf, 0x51, 0xf5,
];

/// `true` iff `modulus` is the NIST P-256 prime, enabling the generator
/// ladder for a context built on it.
pub fn is_p256_modulus(modulus: &[u8]) -> bool {
    modulus == P256_MODULUS
}

static P256_AFFINE_TABLE: OnceLock<Vec<AffineCoords>> = OnceLock::new();

/// Returns the canonical (unscrambled) generator table, building it on
/// first use. Row-major: table `i`, entry `j` is at index
/// `i * P256_POINTS_PER_TABLE + j` and holds `(j * 2^(4i)) * G`.
pub fn generator_table(field: &FieldContext) -> &'static [AffineCoords] {
    P256_AFFINE_TABLE.get_or_init(|| build_generator_table(field))
}

fn build_generator_table(field: &FieldContext) -> Vec<AffineCoords> {
    let mut wp = Workplace::new(field);
    let b3 = field.mul_small(
        &field
            .from_bytes(&P256_B)
            .expect("P-256 b must decode under its own field"),
        3,
    );

    let mut base = ProjectiveCoords {
        x: field
            .from_bytes(&P256_GX)
            .expect("P-256 Gx must decode under its own field"),
        y: field
            .from_bytes(&P256_GY)
            .expect("P-256 Gy must decode under its own field"),
        z: field.one(),
    };

    let mut table = Vec::with_capacity(P256_N_TABLES * P256_POINTS_PER_TABLE);
    for _ in 0..P256_N_TABLES {
        table.push(AffineCoords {
            x: field.zero(),
            y: field.zero(),
        });
        table.push(to_affine(field, &mut wp, &base));

        let mut cur = base.clone();
        for _ in 2..P256_POINTS_PER_TABLE {
            cur = full_add(field, &b3, &mut wp, &cur, &base);
            table.push(to_affine(field, &mut wp, &cur));
        }

        for _ in 0..P256_WINDOW_SIZE {
            base = double(field, &b3, &mut wp, &base);
        }
    }

    table
}

fn to_affine(field: &FieldContext, wp: &mut Workplace, p: &ProjectiveCoords) -> AffineCoords {
    let z_inv = field.inv(&p.z);
    AffineCoords {
        x: field.mul(&p.x, &z_inv, wp.scratch()),
        y: field.mul(&p.y, &z_inv, wp.scratch()),
    }
}

/// `k · G` for the P-256 generator, consuming windows right to left
/// against the precomputed multi-table: one `mix_add` per nibble, no
/// doublings. Fails with [`ScalarError::Value`] if `k` needs more windows
/// than the table provides.
pub fn scalar_mul_generator(
    ctx: &CurveContext,
    wp: &mut Workplace,
    k: &[u8],
) -> Result<ProjectiveCoords, ScalarError> {
    let field = ctx.field();
    let tables = ctx
        .generator_tables
        .as_ref()
        .expect("scalar_mul_generator called on a non-P-256 context");

    let windows = WindowIter::init_rl(P256_WINDOW_SIZE, k);
    if windows.nr_windows() > P256_N_TABLES {
        return Err(ScalarError::Value);
    }

    let mut acc = ProjectiveCoords {
        x: field.zero(),
        y: field.one(),
        z: field.zero(),
    };
    let mut gathered = vec![field.zero(), field.zero()];
    for (i, digit) in windows.enumerate() {
        tables[i].gather(field, digit as usize, &mut gathered);
        let affine = AffineCoords {
            x: gathered[0].clone(),
            y: gathered[1].clone(),
        };
        acc = mix_add(field, &ctx.b3, wp, &acc, &affine);
    }

    Ok(acc)
}
